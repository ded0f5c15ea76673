//! Pipeline stages for QR generation.
//!
//! Each submodule implements exactly one step, and every step consumes the
//! previous step's output.
//!
//! ## Data Flow
//!
//! ```text
//! classify ──▶ normalize ──▶ encode ──▶ naming ──▶ artifact
//! (type)       (scheme)      (qrcode)   (paths)    (png + pdf)
//! ```
//!
//! 1. [`classify`]  — ordered pattern rules assign a [`classify::ContentType`]
//! 2. [`normalize`] — prepend `https://`, `mailto:` or `tel:` where missing
//! 3. [`encode`]    — EC level H symbol rasterised to RGB
//! 4. [`naming`]    — dated slug and the first free `(png, pdf)` pair
//! 5. [`artifact`]  — PNG, then the PDF sheet laid out by [`layout`]

pub mod artifact;
pub mod classify;
pub mod encode;
pub mod layout;
pub mod naming;
pub mod normalize;
