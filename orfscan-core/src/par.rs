/// Parallel map: apply `$f` to each element of `$slice`, collecting into a Vec.
/// Output order follows input order in both modes.
macro_rules! par_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}

/// Parallel fallible map: apply `$f` returning Result to each element, collecting into Result<Vec>.
macro_rules! par_try_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}
