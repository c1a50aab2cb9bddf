//! ユースケース（ports 経由で I/O を行う）

pub(crate) mod app;
pub(crate) mod image;
pub(crate) mod ingest;
pub(crate) mod store;

pub(crate) use app::{AppDeps, AudlisApp};
pub(crate) use image::ImageUseCase;
pub(crate) use ingest::IngestUseCase;
pub(crate) use store::EntryStore;
