//! Request and response shapes of the ThinkPrompt REST API.
//!
//! # Record families
//!
//! - [`Workspace`]: tenant scope selected per session via the `X-Workspace-ID` header.
//! - [`Prompt`] / [`Template`]: reusable prompt text with typed [`PromptVariable`]s.
//! - [`Project`] / [`Feature`] / [`Task`]: work tracking. Features form a tree through
//!   `parent_id`; tasks belong to a project and optionally a feature.
//! - [`Workflow`]: ordered [`WorkflowStep`]s over a set of [`WorkflowResource`]s.
//! - [`TestSession`] / [`TestMetric`] / [`TestIssue`]: runtime QA results.
//! - [`QualitySnapshot`] / [`QualityMetric`] / [`QualityIssue`]: static analysis results.
//! - [`Document`] / [`DocumentFolder`] / [`DocumentVersion`]: versioned text in a folder tree.
//!
//! All records are owned by the remote service. Inputs serialise only the fields that are
//! set, so an omitted option never reaches the wire as `null`.

/// Declares a closed set of wire strings as a Rust enum.
///
/// Generates serde renames, a JSON schema listing the legal values, `as_str`, and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod common;
mod document;
mod project;
mod prompt;
mod quality;
mod task;
mod testing;
mod workflow;
mod workspace;

pub use common::*;
pub use document::*;
pub use project::*;
pub use prompt::*;
pub use quality::*;
pub use task::*;
pub use testing::*;
pub use workflow::*;
pub use workspace::*;
