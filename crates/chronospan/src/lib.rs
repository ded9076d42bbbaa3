// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Chronospan
//!
//! Half-open date-time spans `[start, end)` over naive (timezone-free)
//! instants, with relational queries and set-like operations. The crate
//! provides a single immutable value type intended as a building block for
//! scheduling and calendar logic.
//!
//! ## Modules
//!
//! - `span`: The `DateTimeSpan` value type with validated construction,
//!   duration measurements, half-open membership and containment queries,
//!   intersection/overlap/union/difference/gap operations, and conversions
//!   to/from `std::ops::Range`.
//!
//! ## Design
//!
//! Spans are small `Copy` values validated once at construction
//! (`end >= start`); every query afterwards is a total, pure function.
//! Membership and intersection follow half-open semantics throughout: an
//! event ending at instant `T` does not overlap one starting at `T`.
//!
//! Refer to the `span` module for detailed APIs and examples.

pub mod span;
