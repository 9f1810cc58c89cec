#[macro_use]
extern crate approx;

mod attribute_copy;
mod member_split;
mod planar_cut;
mod rollback;
mod sequencer_properties;
