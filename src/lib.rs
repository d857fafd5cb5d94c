extern crate clap;
extern crate colored;
extern crate num;
extern crate rand;
extern crate time;

pub mod cardinality;
pub mod combinations;
pub mod program_flow;
pub mod set;
pub mod simulation;
pub mod timer;
pub mod util;
