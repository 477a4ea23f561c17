//! # Report Format Tests
//!
//! The final state text must match byte for byte.

use e20_core::config::{Config, ReportConfig};
use e20_core::core::Cpu;
use e20_core::core::arch::Memory;
use e20_core::sim::StateReport;
use pretty_assertions::assert_eq;

const ZERO_LINE: &str = "0000 0000 0000 0000 0000 0000 0000 0000 \n";

#[test]
fn default_report_of_reset_machine() {
    let cpu = Cpu::new(Memory::new(), &Config::default());
    let config = ReportConfig::default();

    let text = StateReport::new(cpu.snapshot(), &config).to_string();

    let mut expected = String::from("Final state:\n\tpc=    0\n");
    for r in 0..8 {
        expected.push_str(&format!("\t${r}=    0\n"));
    }
    for _ in 0..16 {
        expected.push_str(ZERO_LINE);
    }
    assert_eq!(text, expected);
}

#[test]
fn values_are_right_aligned_and_hex_is_lowercase() {
    let mut cpu = Cpu::new(Memory::from_words(&[0xABCD, 0x00FF, 0x1]), &Config::default());
    cpu.pc = 65535;
    cpu.regs.write(1, 5);
    cpu.regs.write(7, 12345);
    let config = ReportConfig {
        memory_words: 8,
        words_per_line: 8,
    };

    let text = StateReport::new(cpu.snapshot(), &config).to_string();

    let expected = "Final state:\n\
                    \tpc=65535\n\
                    \t$0=    0\n\
                    \t$1=    5\n\
                    \t$2=    0\n\
                    \t$3=    0\n\
                    \t$4=    0\n\
                    \t$5=    0\n\
                    \t$6=    0\n\
                    \t$7=12345\n\
                    abcd 00ff 0001 0000 0000 0000 0000 0000 \n";
    assert_eq!(text, expected);
}

#[test]
fn partial_last_line_still_ends_with_newline() {
    let cpu = Cpu::new(Memory::new(), &Config::default());
    let config = ReportConfig {
        memory_words: 12,
        words_per_line: 8,
    };

    let text = StateReport::new(cpu.snapshot(), &config).to_string();

    assert!(text.ends_with(&format!("{ZERO_LINE}0000 0000 0000 0000 \n")));
}

#[test]
fn zero_memory_words_prints_registers_only() {
    let cpu = Cpu::new(Memory::new(), &Config::default());
    let config = ReportConfig {
        memory_words: 0,
        words_per_line: 8,
    };

    let text = StateReport::new(cpu.snapshot(), &config).to_string();

    assert!(text.ends_with("\t$7=    0\n"));
}
