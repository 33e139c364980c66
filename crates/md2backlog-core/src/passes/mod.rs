//! Conversion pass modules.
//!
//! Each pass is a self-contained rewrite that operates on the document as a
//! sequence of line slots. Passes are executed in order (0–7) and each
//! assumes the output of previous passes; the order is a correctness
//! invariant, not a convenience. Pass 0 runs first so every later pass can
//! recognize `{code}` regions and leave their content opaque.

pub mod p0_code_fence;
pub mod p1_quote;
pub mod p2_table;
pub mod p3_line_markup;
pub mod p4_emphasis;
pub mod p5_links;
pub mod p6_html;
pub mod p7_heading_trim;
