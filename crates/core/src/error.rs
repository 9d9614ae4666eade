use thiserror::Error;

use crate::content::ContentError;
use crate::model::IdentityError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
