//! Per-table accessors.

pub mod cmap;
pub mod glyf;
pub mod head;
pub mod hea;
pub mod hmtx;
pub mod os2;
