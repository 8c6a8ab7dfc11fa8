#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod model {
    pub use rdf_mapping_model::*;
}

pub mod functions {
    pub use rdf_mapping_functions::*;
}

pub mod logical {
    pub use rdf_mapping_logical::*;
}

pub mod sources {
    pub use rdf_mapping_sources::*;
}
