//! Tests for the field codec and line splitter
