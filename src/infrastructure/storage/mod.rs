mod cloudinary_uploader;
mod local_uploader;
mod uploader_factory;

pub use cloudinary_uploader::{CloudinaryUploader, sign_params};
pub use local_uploader::LocalUploader;
pub use uploader_factory::{UploaderFactory, UploaderFactoryError};
