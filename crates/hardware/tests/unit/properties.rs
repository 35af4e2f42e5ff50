//! # Generated Program Properties
//!
//! Invariants that must hold for every program of a given shape, checked
//! over randomly generated straight-line programs.

use std::collections::HashSet;

use iss_core::config::Config;
use iss_core::isa::Instruction;
use iss_core::sim::loader::Program;
use iss_core::sim::simulator::execute;
use proptest::prelude::*;

/// A register-only instruction, without its line label.
#[derive(Clone, Debug)]
enum AluIns {
    MovImm(usize, i64),
    MovReg(usize, usize),
    AddImm(usize, i64),
    AddReg(usize, usize),
    Cmp(usize, usize),
}

impl AluIns {
    fn at(&self, line: u32) -> Instruction {
        match *self {
            Self::MovImm(rd, imm) => Instruction::mov_imm(line, rd, imm),
            Self::MovReg(rd, rs) => Instruction::mov_reg(line, rd, rs),
            Self::AddImm(rd, imm) => Instruction::add_imm(line, rd, imm),
            Self::AddReg(rd, rs) => Instruction::add_reg(line, rd, rs),
            Self::Cmp(rn, rm) => Instruction::cmp(line, rn, rm),
        }
    }
}

fn reg() -> impl Strategy<Value = usize> {
    0usize..7
}

fn imm() -> impl Strategy<Value = i64> {
    -128i64..=127
}

fn alu_ins() -> impl Strategy<Value = AluIns> {
    prop_oneof![
        (reg(), imm()).prop_map(|(rd, v)| AluIns::MovImm(rd, v)),
        (reg(), reg()).prop_map(|(rd, rs)| AluIns::MovReg(rd, rs)),
        (reg(), imm()).prop_map(|(rd, v)| AluIns::AddImm(rd, v)),
        (reg(), reg()).prop_map(|(rd, rs)| AluIns::AddReg(rd, rs)),
        (reg(), reg()).prop_map(|(rn, rm)| AluIns::Cmp(rn, rm)),
    ]
}

fn alu_program(base: u32, body: &[AluIns]) -> Program {
    Program::new(
        body.iter()
            .zip(base..)
            .map(|(ins, line)| ins.at(line))
            .collect(),
    )
}

/// `MOV R1, addr` followed by a load or store through R1, per address.
fn memory_program(accesses: &[(u8, bool)]) -> Program {
    let mut out = Vec::with_capacity(accesses.len() * 2);
    let mut line = 1;
    for &(addr, is_store) in accesses {
        out.push(Instruction::mov_imm(line, 1, i64::from(addr)));
        out.push(if is_store {
            Instruction::st(line + 1, 1, 0)
        } else {
            Instruction::ld(line + 1, 2, 1)
        });
        line += 2;
    }
    Program::new(out)
}

proptest! {
    #[test]
    fn alu_programs_cost_one_cycle_per_instruction(
        base in 0u32..1000,
        body in prop::collection::vec(alu_ins(), 0..64),
    ) {
        let program = alu_program(base, &body);
        let outcome = execute(&program, &Config::default()).unwrap();

        prop_assert_eq!(outcome.stats.instructions, body.len() as u64);
        prop_assert_eq!(outcome.stats.cycles, outcome.stats.instructions);
        prop_assert_eq!(outcome.stats.memory_hits, 0);
        prop_assert_eq!(outcome.stats.load_store, 0);
    }

    #[test]
    fn runs_are_deterministic(body in prop::collection::vec(alu_ins(), 1..64)) {
        let program = alu_program(1, &body);
        let config = Config::default();

        let first = execute(&program, &config).unwrap();
        let second = execute(&program, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn first_touch_misses_and_later_touches_hit(
        accesses in prop::collection::vec((any::<u8>(), any::<bool>()), 0..48),
    ) {
        let program = memory_program(&accesses);
        let outcome = execute(&program, &Config::default()).unwrap();

        let mut seen = HashSet::new();
        let mut hits = 0u64;
        let mut cycles = 0u64;
        for &(addr, _) in &accesses {
            if seen.insert(addr) {
                cycles += 1 + 45;
            } else {
                hits += 1;
                cycles += 1 + 2;
            }
        }

        prop_assert_eq!(outcome.stats.load_store, accesses.len() as u64);
        prop_assert_eq!(outcome.stats.memory_hits, hits);
        prop_assert_eq!(outcome.stats.memory_misses(), seen.len() as u64);
        prop_assert_eq!(outcome.stats.cycles, cycles);
    }

    #[test]
    fn hits_never_exceed_accesses(
        accesses in prop::collection::vec((any::<u8>(), any::<bool>()), 0..48),
    ) {
        let outcome = execute(&memory_program(&accesses), &Config::default()).unwrap();
        prop_assert!(outcome.stats.memory_hits <= outcome.stats.load_store);
        prop_assert!(outcome.stats.load_store <= outcome.stats.instructions);
    }
}
