//! Internal macros for arity-generic implementations.
//!
//! Rust has no variadic generics, so every trait over argument tuples is
//! implemented once per arity by feeding [`for_each_arity!`] a callback
//! macro. The callback receives `binding: TypeParam` pairs, e.g.
//! `a1: A1, a2: A2`.

// ============================================================================
// ARITY EXPANSION
// ============================================================================

/// Invokes `$callback!` for every tuple arity from 1 to 10.
macro_rules! for_each_arity {
    ($callback:ident) => {
        $callback!(a1: A1);
        $callback!(a1: A1, a2: A2);
        $callback!(a1: A1, a2: A2, a3: A3);
        $callback!(a1: A1, a2: A2, a3: A3, a4: A4);
        $callback!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
        $callback!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
        $callback!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
        $callback!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
        $callback!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9);
        $callback!(
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9, a10: A10
        );
    };
}

pub(crate) use for_each_arity;
