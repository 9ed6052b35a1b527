// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod export;
mod policy;
mod requests;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, BcryptVerifier, CredentialVerifier};
pub use error::{ApiError, AuthError};
pub use export::{ExportArtifact, ExportMode, build_export};
pub use policy::{PinPolicy, PinPolicyError};
pub use requests::{
    CreateMenuCategoryRequest, CreateMenuItemRequest, CreateMomentRequest, CreateNightRequest,
    CreateRoomRequest, ExtendMomentRequest, PersonForm, UpdateSettingsRequest,
};
