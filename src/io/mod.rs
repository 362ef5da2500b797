//! File format adapters. Pure, fallible functions: nothing in this module
//! touches the sweep or DCEL algorithms, it only marshals data in and out of
//! their input/output types.

pub mod geojson;
pub mod segments;
