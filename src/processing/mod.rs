/*! Corpus processing

File-level transformations: each submodule backs one of the binaries.
!*/
pub mod annotations;
pub mod countries;
pub mod entities;
pub mod recommend;
pub mod sample;
pub mod split;
pub mod strip;
pub mod template;
pub mod topics;
