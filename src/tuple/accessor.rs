//! Accessor traits and their implementations for each arity.

/// Read access to the first slot.
pub trait First {
    /// Type stored in the first slot.
    type Output;

    /// Returns a reference to the first element.
    fn e1(&self) -> &Self::Output;

    /// Consumes the tuple and returns the first element.
    fn into_e1(self) -> Self::Output;
}

/// Read access to the second slot.
pub trait Second {
    /// Type stored in the second slot.
    type Output;

    /// Returns a reference to the second element.
    fn e2(&self) -> &Self::Output;

    /// Consumes the tuple and returns the second element.
    fn into_e2(self) -> Self::Output;
}

/// Read access to the third slot.
pub trait Third {
    /// Type stored in the third slot.
    type Output;

    /// Returns a reference to the third element.
    fn e3(&self) -> &Self::Output;

    /// Consumes the tuple and returns the third element.
    fn into_e3(self) -> Self::Output;
}

/// Read access to the fourth slot.
pub trait Fourth {
    /// Type stored in the fourth slot.
    type Output;

    /// Returns a reference to the fourth element.
    fn e4(&self) -> &Self::Output;

    /// Consumes the tuple and returns the fourth element.
    fn into_e4(self) -> Self::Output;
}

// (trait, borrowing accessor, consuming accessor, slot index, slot type; tuple type parameters)
macro_rules! impl_accessor {
    ($accessor:ident, $borrow:ident, $consume:ident, $index:tt, $output:ident; $($parameter:ident),+) => {
        impl<$($parameter),+> $accessor for ($($parameter,)+) {
            type Output = $output;

            #[inline]
            fn $borrow(&self) -> &Self::Output {
                &self.$index
            }

            #[inline]
            fn $consume(self) -> Self::Output {
                self.$index
            }
        }
    };
}

impl_accessor!(First, e1, into_e1, 0, A; A, B);
impl_accessor!(Second, e2, into_e2, 1, B; A, B);

impl_accessor!(First, e1, into_e1, 0, A; A, B, C);
impl_accessor!(Second, e2, into_e2, 1, B; A, B, C);
impl_accessor!(Third, e3, into_e3, 2, C; A, B, C);

impl_accessor!(First, e1, into_e1, 0, A; A, B, C, D);
impl_accessor!(Second, e2, into_e2, 1, B; A, B, C, D);
impl_accessor!(Third, e3, into_e3, 2, C; A, B, C, D);
impl_accessor!(Fourth, e4, into_e4, 3, D; A, B, C, D);
