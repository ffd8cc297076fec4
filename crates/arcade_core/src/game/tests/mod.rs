//! Cross-module gameplay tests

mod frame_order;
