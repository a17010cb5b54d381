pub mod libs;

pub use crate::libs::cluster::{cluster, cluster_with, Cluster};
pub use crate::libs::fasta::{parse, parse_file};
pub use crate::libs::identity::identity;
pub use crate::libs::io::{reader, writer};
