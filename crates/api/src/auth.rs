// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication services: sign-up, sign-in, session validation,
//! sign-out, and credential changes.
//!
//! Sessions are opaque tokens stored against the auth account. A
//! session is only usable while a staff record is linked to the
//! account; an account without one is an orphan and is refused (and
//! stripped of) any session it holds.

use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use frontdesk_domain::{format_timestamp, parse_timestamp};
use frontdesk_persistence::{AccountData, Persistence, SessionData, StaffData, verify_password};

use crate::error::{ApiError, AuthError};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    ChangePasswordRequest, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
    StaffInfo, UpdateProfileRequest,
};

/// The authenticated staff member attached to a request.
///
/// Built by session validation and passed by reference to every gated
/// handler; there is no global session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedStaff {
    /// The staff record id.
    pub staff_id: i64,
    /// The linked auth account id.
    pub account_id: i64,
    /// Staff email.
    pub email: String,
    /// Staff full name.
    pub full_name: String,
    /// Role label; informational only.
    pub role: String,
}

impl AuthenticatedStaff {
    fn from_staff(staff: &StaffData) -> Self {
        Self {
            staff_id: staff.staff_id,
            account_id: staff.account_id,
            email: staff.email.clone(),
            full_name: staff.full_name.clone(),
            role: staff.role.clone(),
        }
    }

    /// Returns the staff info response for this staff member.
    #[must_use]
    pub fn to_info(&self) -> StaffInfo {
        StaffInfo {
            staff_id: self.staff_id,
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Authentication service for session-based staff authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session expiration duration (30 days).
    const SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Registers a new staff member.
    ///
    /// Rejects the registration when a staff record with the email
    /// already exists. Otherwise creates the auth account first and
    /// the linked staff record second; if the staff insert fails the
    /// account remains behind as an orphan — there is no compensating
    /// delete.
    ///
    /// # Errors
    ///
    /// Returns an error if a staff record with the email exists, the
    /// password fails policy, or persistence fails.
    pub fn sign_up(
        persistence: &mut Persistence,
        request: &SignUpRequest,
    ) -> Result<SignUpResponse, ApiError> {
        PasswordPolicy::default().validate(&request.password, &request.email)?;

        if persistence.get_staff_by_email(&request.email)?.is_some() {
            return Err(ApiError::DomainRuleViolation {
                rule: String::from("unique_staff_email"),
                message: String::from("A user with this email already exists"),
            });
        }

        let account_id: i64 = persistence
            .create_account(&request.email, &request.password)
            .map_err(|e| ApiError::DomainRuleViolation {
                rule: String::from("unique_account_email"),
                message: format!("Could not create account: {e}"),
            })?;

        // If this insert fails the account above still exists; the
        // orphan is surfaced at sign-in, not repaired here.
        let staff_id: i64 = persistence.create_staff(
            account_id,
            &request.email,
            &request.full_name,
            &request.role,
        )?;

        info!(staff_id, email = %request.email, "Staff registration complete");

        Ok(SignUpResponse {
            staff_id,
            email: request.email.to_lowercase(),
            message: String::from("Registration successful! Please sign in."),
        })
    }

    /// Authenticates a staff member and creates a session.
    ///
    /// Credentials are checked against the auth account; a session is
    /// created and then the linked staff record is required. When the
    /// staff record is missing, the fresh session is deleted again
    /// (forced sign-out) and an error is surfaced — no session
    /// persists for an orphaned account.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are wrong or no staff
    /// record is linked to the account.
    pub fn sign_in(
        persistence: &mut Persistence,
        request: &SignInRequest,
    ) -> Result<SignInResponse, AuthError> {
        let account: AccountData = persistence
            .get_account_by_email(&request.email)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid login credentials"),
            })?;

        let password_ok: bool = verify_password(&request.password, &account.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !password_ok {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid login credentials"),
            });
        }

        let session_token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + Self::SESSION_EXPIRATION;
        let expires_at_str: String =
            format_timestamp(expires_at).map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, account.account_id, &expires_at_str)
            .map_err(Self::map_persistence_error)?;

        let staff: Option<StaffData> = persistence
            .get_staff_by_account(account.account_id)
            .map_err(Self::map_persistence_error)?;

        let Some(staff) = staff else {
            // Orphaned account: force sign-out so no session persists.
            warn!(email = %request.email, "Sign-in refused: no staff record for account");
            persistence
                .delete_session(&session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Staff record not found. Please contact administrator."),
            });
        };

        info!(staff_id = staff.staff_id, "Staff signed in");

        Ok(SignInResponse {
            session_token,
            staff: StaffInfo {
                staff_id: staff.staff_id,
                email: staff.email,
                full_name: staff.full_name,
                role: staff.role,
            },
        })
    }

    /// Validates a session token and returns the authenticated staff
    /// member.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or the
    /// staff record behind it has gone missing (the session is deleted
    /// in that case).
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedStaff, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = parse_timestamp(&session.expires_at).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            }
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let staff: Option<StaffData> = persistence
            .get_staff_by_account(session.account_id)
            .map_err(Self::map_persistence_error)?;

        let Some(staff) = staff else {
            warn!("Session refers to an account with no staff record; forcing sign-out");
            persistence
                .delete_session(session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Staff record not found. Please contact administrator."),
            });
        };

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok(AuthenticatedStaff::from_staff(&staff))
    }

    /// Signs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be deleted.
    pub fn sign_out(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;
        Ok(())
    }

    /// Updates the signed-in staff member's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or persistence fails.
    pub fn update_profile(
        persistence: &mut Persistence,
        staff: &AuthenticatedStaff,
        request: &UpdateProfileRequest,
    ) -> Result<StaffInfo, ApiError> {
        if request.full_name.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("full_name"),
                message: String::from("Full name must not be empty"),
            });
        }

        persistence.update_staff_name(staff.staff_id, request.full_name.trim())?;

        Ok(StaffInfo {
            staff_id: staff.staff_id,
            email: staff.email.clone(),
            full_name: request.full_name.trim().to_string(),
            role: staff.role.clone(),
        })
    }

    /// Changes the signed-in staff member's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the current password is wrong, the new
    /// password fails policy, or persistence fails.
    pub fn change_password(
        persistence: &mut Persistence,
        staff: &AuthenticatedStaff,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        let account: AccountData = persistence
            .get_account_by_id(staff.account_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Account"),
                message: format!("Account {} does not exist", staff.account_id),
            })?;

        let current_ok: bool =
            verify_password(&request.current_password, &account.password_hash)?;
        if !current_ok {
            return Err(ApiError::AuthenticationFailed {
                reason: String::from("Current password is incorrect"),
            });
        }

        PasswordPolicy::default().validate_with_confirmation(
            &request.new_password,
            &request.confirm_password,
            &staff.email,
        )?;

        persistence.update_account_password(staff.account_id, &request.new_password)?;

        info!(staff_id = staff.staff_id, "Password changed");
        Ok(())
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        format!(
            "session_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    fn map_persistence_error(err: frontdesk_persistence::PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
