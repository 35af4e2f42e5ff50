//! # Decoder Tests
//!
//! One line of assembly becomes one instruction, or a MalformedInstruction
//! error naming the line. Covers every mnemonic's operand shapes, separator
//! tolerance, and rejection of bad shapes.

use iss_core::SimError;
use iss_core::isa::Instruction;
use iss_core::isa::decode::{decode_line, decode_source};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn decode(text: &str) -> Instruction {
    decode_line(1, text)
        .unwrap()
        .expect("line should hold an instruction")
}

fn reason(text: &str) -> String {
    match decode_line(1, text) {
        Err(SimError::MalformedInstruction { reason, .. }) => reason,
        other => panic!("expected MalformedInstruction for {text:?}, got {other:?}"),
    }
}

// ──────────────────────────────────────────────────────────
// Operand shapes
// ──────────────────────────────────────────────────────────

#[rstest]
#[case("1 MOV R0, 5", Instruction::mov_imm(1, 0, 5))]
#[case("2 MOV R6, R1", Instruction::mov_reg(2, 6, 1))]
#[case("3 ADD R0, R1", Instruction::add_reg(3, 0, 1))]
#[case("4 ADD R2, -128", Instruction::add_imm(4, 2, -128))]
#[case("5 CMP R0, R1", Instruction::cmp(5, 0, 1))]
#[case("6 JE 1", Instruction::je(6, 1))]
#[case("7 JMP 3", Instruction::jmp(7, 3))]
#[case("7 JE -1", Instruction::je(7, -1))]
#[case("7 JMP -40", Instruction::jmp(7, -40))]
#[case("8 LD R2, [R1]", Instruction::ld(8, 2, 1))]
#[case("9 ST [R1], R0", Instruction::st(9, 1, 0))]
fn decodes_each_mnemonic(#[case] text: &str, #[case] expected: Instruction) {
    assert_eq!(decode(text), expected);
}

#[test]
fn store_normalizes_operand_order() {
    let ins = decode("9 ST [R3], R5");
    assert_eq!(ins.reg1, 5, "reg1 holds the value register");
    assert_eq!(ins.reg2, 3, "reg2 holds the address register");
}

#[test]
fn immediate_flag_only_for_immediate_forms() {
    assert!(decode("1 MOV R0, 5").is_immediate);
    assert!(!decode("1 MOV R0, R5").is_immediate);
    assert!(decode("1 ADD R0, 0").is_immediate);
}

#[rstest]
#[case("1 MOV R0 5")]
#[case("1 MOV R0,5")]
#[case("1\tMOV\tR0 ,  5")]
#[case("  1 MOV R0, 5  ")]
#[case("1 mov R0, 5")]
fn separators_and_case_are_tolerated(#[case] text: &str) {
    assert_eq!(decode(text), Instruction::mov_imm(1, 0, 5));
}

// ──────────────────────────────────────────────────────────
// Non-instructions
// ──────────────────────────────────────────────────────────

#[rstest]
#[case("")]
#[case("    ")]
#[case("; just a comment")]
#[case("   ;indented comment")]
fn blank_and_comment_lines_yield_nothing(#[case] text: &str) {
    assert_eq!(decode_line(1, text).unwrap(), None);
}

// ──────────────────────────────────────────────────────────
// Malformed input
// ──────────────────────────────────────────────────────────

#[rstest]
#[case("MOV R0, 5", "line number")]
#[case("1", "missing mnemonic")]
#[case("1 NOP", "unknown mnemonic")]
#[case("1 MOV R0", "2 operands")]
#[case("1 CMP R0, R1, R2", "2 operands")]
#[case("1 JMP", "1 operand")]
#[case("1 MOV R7, 1", "does not exist")]
#[case("1 MOV X0, 1", "expected a register")]
#[case("1 MOV R0, five", "expected an integer")]
#[case("1 LD R0, R1", "[Rn]")]
#[case("1 ST R1, R0", "[Rn]")]
#[case("1 JE R1", "target line")]
#[case("1 CMP R0, 5", "expected a register")]
fn rejects_bad_shapes(#[case] text: &str, #[case] needle: &str) {
    let why = reason(text);
    assert!(why.contains(needle), "{text:?}: reason {why:?} lacks {needle:?}");
}

#[test]
fn source_decoding_is_all_or_nothing() {
    let src = "1 MOV R0, 5\n2 MOV R1, 3\n3 BOGUS\n4 ADD R0, R1\n";
    match decode_source(src) {
        Err(SimError::MalformedInstruction { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected failure on line 3, got {other:?}"),
    }
}

#[test]
fn source_positions_count_skipped_lines() {
    let src = "; header\n\n1 MOV R0, 5\n2 LD R0\n";
    match decode_source(src) {
        Err(SimError::MalformedInstruction { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected failure on line 4, got {other:?}"),
    }
}
