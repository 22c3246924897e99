pub mod cesaro;
pub mod cesaro_tri;
pub mod curve_kinds;
pub mod dragon;
pub mod errors;
pub mod grammar;
pub mod koch_curve;
pub mod levy_c_curve;
pub mod terdragon;
