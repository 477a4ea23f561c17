//! # Instruction Decode Properties
//!
//! Verifies that `decode()` produces the right variant and fields for every
//! opcode, with immediates sign-extended.

use e20_core::isa::decode::sign_extend_imm7;
use e20_core::isa::{AluFunct, AluInst, ControlInst, ImmInst, Instruction, decode};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[rstest]
#[case(0b0000, AluFunct::Add)]
#[case(0b0001, AluFunct::Sub)]
#[case(0b0010, AluFunct::Or)]
#[case(0b0011, AluFunct::And)]
#[case(0b0100, AluFunct::Slt)]
#[case(0b1000, AluFunct::Jr)]
#[case(0b0101, AluFunct::Undefined(0b0101))]
#[case(0b1111, AluFunct::Undefined(0b1111))]
fn alu_function_codes(#[case] code: u16, #[case] funct: AluFunct) {
    assert_eq!(
        decode(reg(code, 1, 2, 3)),
        Instruction::Alu(AluInst {
            funct,
            src_a: 1,
            src_b: 2,
            dst: 3
        })
    );
}

#[test]
fn addi_scenario_word() {
    assert_eq!(
        decode(0b0010000010000101),
        Instruction::Imm(ImmInst::Addi {
            src: 0,
            dst: 1,
            imm: 5
        })
    );
}

#[test]
fn negative_immediates_are_sign_extended() {
    assert_eq!(
        decode(addi(2, 1, -1)),
        Instruction::Imm(ImmInst::Addi {
            src: 1,
            dst: 2,
            imm: 0xFFFF
        })
    );
    assert_eq!(
        decode(slti(3, 4, -64)),
        Instruction::Imm(ImmInst::Slti {
            src: 4,
            dst: 3,
            imm: 0xFFC0
        })
    );
    assert_eq!(
        decode(jeq(1, 2, -2)),
        Instruction::Imm(ImmInst::Jeq {
            reg_a: 1,
            reg_b: 2,
            imm: 0xFFFE
        })
    );
}

#[test]
fn memory_forms_use_shifted_fields() {
    assert_eq!(
        decode(lw(2, 5, 7)),
        Instruction::Imm(ImmInst::Lw {
            base: 5,
            dst: 2,
            imm: 7
        })
    );
    assert_eq!(
        decode(sw(4, 3, 1)),
        Instruction::Imm(ImmInst::Sw {
            base: 3,
            src: 4,
            imm: 1
        })
    );
}

#[test]
fn control_forms() {
    assert_eq!(
        decode(0b0100000000000000),
        Instruction::Control(ControlInst::J { target: 0 })
    );
    assert_eq!(
        decode(jal(0x1234)),
        Instruction::Control(ControlInst::Jal { target: 0x1234 })
    );
    assert_eq!(decode(j(42)).jump_target(), Some(42));
    assert_eq!(decode(jal(42)).jump_target(), None);
}

proptest! {
    #[test]
    fn every_word_decodes_to_its_opcode_class(word in any::<u16>()) {
        let class = word >> 13;
        let ok = match decode(word) {
            Instruction::Alu(_) => class == 0b000,
            Instruction::Imm(_) => matches!(class, 0b001 | 0b100 | 0b101 | 0b110 | 0b111),
            Instruction::Control(_) => matches!(class, 0b010 | 0b011),
        };
        prop_assert!(ok);
    }

    #[test]
    fn sign_extended_range(raw in 0u16..0x80) {
        let val = sign_extend_imm7(raw) as i16;
        prop_assert!((-64..=63).contains(&val));
        if raw & 0x40 != 0 {
            prop_assert!((-64..=-1).contains(&val));
            prop_assert_eq!(val, raw as i16 - 128);
        } else {
            prop_assert_eq!(val, raw as i16);
        }
    }
}
