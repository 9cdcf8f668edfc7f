//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Decode:** Reads the instruction word and its operands at PC.
//! 2. **Dispatch:** Routes ALU-class words to the ALU and everything else to a handler.
//! 3. **PC Update:** Advances PC past the operands unless the handler set it.
//! 4. **Fault Handling:** Latches the machine halted and tags faults with their PC.

use tracing::{debug, error, info};

use super::Cpu;
use crate::common::error::{ExecutionError, Fault};
use crate::core::units::alu::{Alu, AluOutcome};
use crate::isa::decode::{Decoded, decode};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{AluOp, Opcode};

/// Machine state after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More instructions to run.
    Continue,
    /// `HLT` has executed; further steps do nothing.
    Halted,
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// Stepping a machine stopped by `HLT` is a no-op that reports
    /// [`StepOutcome::Halted`].
    ///
    /// # Errors
    ///
    /// Any [`Fault`] raised by the instruction, tagged with its PC. The
    /// machine is halted and the error latched before it is returned; every
    /// later step returns the same error until [`Cpu::reset`].
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        if let Some(err) = &self.fault {
            return Err(err.clone());
        }
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let pc = self.pc;
        if let Err(fault) = self.execute(pc) {
            error!(pc, %fault, "fatal fault, machine halted");
            let err = ExecutionError::new(pc, fault);
            self.halted = true;
            self.fault = Some(err.clone());
            return Err(err);
        }
        self.stats.steps += 1;

        Ok(if self.halted {
            StepOutcome::Halted
        } else {
            StepOutcome::Continue
        })
    }

    /// Steps until `HLT` or a fault.
    ///
    /// There is no stop check here; [`Simulator::run`](crate::sim::Simulator::run)
    /// adds one along with a step budget.
    ///
    /// # Errors
    ///
    /// The first fault raised, tagged with its PC.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while self.step()? == StepOutcome::Continue {}
        Ok(())
    }

    fn execute(&mut self, pc: usize) -> Result<(), Fault> {
        let d = decode(&self.memory, pc)?;

        if self.trace {
            debug!(pc, word = d.word, "{}", disassemble(&d));
        }

        if d.is_alu {
            self.alu(AluOp::from_bits(d.opcode)?, d.a(), d.b())?;
        } else if let Some(op) = Opcode::from_bits(d.opcode) {
            self.dispatch(op, &d)?;
        } else {
            // No handler: step over the word and its operands regardless of
            // the sets-PC bit, since nothing else will move PC.
            debug!(pc, word = d.word, "no handler, skipped");
            self.stats.unknown_ops += 1;
            self.pc = d.next_pc();
            return Ok(());
        }

        if !d.sets_pc && !self.halted {
            self.pc = d.next_pc();
        }
        Ok(())
    }

    fn dispatch(&mut self, op: Opcode, d: &Decoded) -> Result<(), Fault> {
        match op {
            Opcode::Hlt => self.hlt(),
            Opcode::Ldi => self.ldi(d.a(), d.b()),
            Opcode::Prn => self.prn(d.a()),
            Opcode::Push => self.push(d.a())?,
            Opcode::Pop => self.pop(d.a())?,
            Opcode::Call => self.call(d.a(), d.next_pc())?,
            Opcode::Ret => self.ret()?,
            Opcode::Jmp => self.jmp(d.a()),
            Opcode::Jeq => self.jeq(d.a(), d.next_pc()),
            Opcode::Jne => self.jne(d.a(), d.next_pc()),
        }
        Ok(())
    }

    /// Runs an ALU operation on registers `reg_a` and `reg_b`.
    ///
    /// Arithmetic results land in `reg_a`; `CMP` writes only the flags.
    ///
    /// # Errors
    ///
    /// [`Fault::DivideByZero`] when dividing by a register holding zero.
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), Fault> {
        let a = self.regs.read(usize::from(reg_a));
        let b = self.regs.read(usize::from(reg_b));
        match Alu::execute(op, a, b)? {
            AluOutcome::Write(val) => self.regs.write(usize::from(reg_a), val),
            AluOutcome::Flags(flags) => self.flags = flags,
        }
        self.stats.alu_ops += 1;
        Ok(())
    }

    /// `LDI`: loads `imm` into register `dst`.
    pub fn ldi(&mut self, dst: u8, imm: u8) {
        self.regs.write(usize::from(dst), imm);
    }

    /// `PRN`: prints register `src` to the console.
    pub fn prn(&mut self, src: u8) {
        let value = self.regs.read(usize::from(src));
        self.console.print(value);
        self.stats.prints += 1;
    }

    /// `HLT`: stops the machine. PC is left on the `HLT`.
    pub fn hlt(&mut self) {
        self.halted = true;
        info!(pc = self.pc, steps = self.stats.steps + 1, "halted");
    }

    /// `PUSH`: decrements `SP`, then stores register `src` at `SP`.
    ///
    /// The source is read after the decrement, so `PUSH R7` stores the new `SP`.
    ///
    /// # Errors
    ///
    /// Never in practice: `SP` always addresses memory.
    pub fn push(&mut self, src: u8) -> Result<(), Fault> {
        let top = self.grow_stack();
        let value = self.regs.read(usize::from(src));
        self.memory.write(top, value)?;
        self.stats.stack_ops += 1;
        Ok(())
    }

    /// `POP`: loads the byte at `SP` into register `dst`, then increments `SP`.
    ///
    /// The increment applies after the write, so `POP R7` leaves `SP` one past
    /// the loaded value.
    ///
    /// # Errors
    ///
    /// Never in practice: `SP` always addresses memory.
    pub fn pop(&mut self, dst: u8) -> Result<(), Fault> {
        let value = self.memory.read(self.stack_top())?;
        self.regs.write(usize::from(dst), value);
        self.shrink_stack();
        self.stats.stack_ops += 1;
        Ok(())
    }

    /// `CALL`: pushes `return_addr` and jumps to the address in register `target`.
    ///
    /// # Errors
    ///
    /// [`Fault::AddressOutOfBounds`] when the return address does not fit in
    /// a byte (a `CALL` in the last two memory cells).
    pub fn call(&mut self, target: u8, return_addr: usize) -> Result<(), Fault> {
        let dest = self.regs.read(usize::from(target));
        let ret = u8::try_from(return_addr)
            .map_err(|_| Fault::AddressOutOfBounds { addr: return_addr })?;
        self.push_byte(ret)?;
        self.pc = usize::from(dest);
        self.stats.stack_ops += 1;
        self.stats.branches_taken += 1;
        Ok(())
    }

    /// `RET`: pops the return address and jumps to it.
    ///
    /// # Errors
    ///
    /// Never in practice: `SP` always addresses memory.
    pub fn ret(&mut self) -> Result<(), Fault> {
        self.ret_latch = self.pop_byte()?;
        self.pc = usize::from(self.ret_latch);
        self.stats.stack_ops += 1;
        self.stats.branches_taken += 1;
        Ok(())
    }

    /// `JMP`: jumps to the address in register `target`.
    pub fn jmp(&mut self, target: u8) {
        self.pc = usize::from(self.regs.read(usize::from(target)));
        self.stats.branches_taken += 1;
    }

    /// `JEQ`: jumps to register `target` if the equal flag is set, else to `fallthrough`.
    pub fn jeq(&mut self, target: u8, fallthrough: usize) {
        self.branch_if(self.flags.equal(), target, fallthrough);
    }

    /// `JNE`: jumps to register `target` if the equal flag is clear, else to `fallthrough`.
    pub fn jne(&mut self, target: u8, fallthrough: usize) {
        self.branch_if(!self.flags.equal(), target, fallthrough);
    }

    fn branch_if(&mut self, taken: bool, target: u8, fallthrough: usize) {
        if taken {
            self.jmp(target);
        } else {
            self.pc = fallthrough;
            self.stats.branches_not_taken += 1;
        }
    }
}
