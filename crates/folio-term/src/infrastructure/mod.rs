//! Infrastructure layer providing external integrations.
//!
//! This module contains the GitHub profile client, the email relay client and
//! the system URL opener.

pub mod clients;
