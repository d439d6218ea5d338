use std::cell::Cell;

use solana_program::clock::Clock;

thread_local! {
    static SLOT: Cell<u64> = Cell::new(0);
}

struct MockSyscall {}

impl solana_program::program_stubs::SyscallStubs for MockSyscall {
    fn sol_get_clock_sysvar(&self, var_addr: *mut u8) -> u64 {
        let clock = Clock {
            slot: SLOT.with(|slot| slot.get()),
            ..Default::default()
        };

        unsafe { *(var_addr as *mut Clock) = clock };

        solana_program::entrypoint::SUCCESS
    }
}

fn install_mock() {
    use std::sync::Once;

    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        solana_program::program_stubs::set_syscall_stubs(Box::new(MockSyscall {}));
    });
}

/// Mock block height for use in tests.
///
/// The height is tracked per thread, so tests running in parallel do not
/// observe each other's chain.
pub fn block_height(height: u64) {
    install_mock();
    SLOT.with(|slot| slot.set(height));
}
