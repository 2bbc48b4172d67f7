/// Expands to the number of identifiers it receives.
#[macro_export]
macro_rules! count {
    () => { 0 };
    ($v:ident $(,$vs:ident)*) => { 1 + $crate::count!($($vs),*) };
}

/// Invokes `$m` with every suffix of the `(parameter, type)` list, longest first,
/// and finally with no arguments.
#[macro_export]
macro_rules! recurse {
    ($m:ident) => { $m!(); };
    ($m:ident, $p:ident, $t:ident $(,$ps:ident, $ts:ident)* $(,)?) => {
        $m!($p, $t $(,$ps, $ts)*);
        $crate::recurse!($m $(,$ps, $ts)*);
    };
}

#[macro_export]
macro_rules! recurse_8 {
    ($m:ident) => {
        $crate::recurse!($m, p0, T0, p1, T1, p2, T2, p3, T3, p4, T4, p5, T5, p6, T6, p7, T7);
    };
}

/// Invokes `$m` once per primitive scalar type.
#[macro_export]
macro_rules! primitives {
    ($m:ident) => {
        $m!(u8);
        $m!(u16);
        $m!(u32);
        $m!(u64);
        $m!(u128);
        $m!(usize);
        $m!(i8);
        $m!(i16);
        $m!(i32);
        $m!(i64);
        $m!(i128);
        $m!(isize);
        $m!(f32);
        $m!(f64);
        $m!(bool);
        $m!(char);
    };
}
