/// Asserts that a condition is `true` at compile-time.
///
/// Used for layout constraints, e.g. that a derived seed still fits into a
/// program derived address.
#[macro_export]
macro_rules! static_assert {
    (@check $cond:expr, $($msg:tt)+) => {
        // Older BPF toolchains cannot panic in const context. Indexing an
        // empty array with the negated condition fails the build instead.
        #[$crate::_private::rustversion::before(1.57)]
        const _: [(); !{
            const COND: bool = $cond;
            COND
        } as usize] = [];

        #[$crate::_private::rustversion::since(1.57)]
        const _: () = {
            if !$cond {
                ::std::panic!($($msg)+);
            }
        };
    };
    ($cond:expr $(,)?) => {
        $crate::static_assert!(@check $cond, concat!("static assertion failed: ", stringify!($cond)));
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::static_assert!(@check $cond, $($msg)+);
    };
}
