//! Theme: palette, icons, and semantic style builders.

pub mod icons;
pub mod palette;
pub mod styles;
