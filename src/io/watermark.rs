/*
    Uniform CLT, Monte Carlo verification of the central limit theorem
    Copyright (C) 2023 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use shadow_rs::shadow;
use std::fmt;
use whoami::{realname, username};

shadow!(build);

/// Placeholder used in place of a commit hash when the crate was not built from a git repository
pub const NO_GIT_REPO: &str = "not-a-git-repo";

/// Identifies the source revision an experiment was run from, appended to the output file names
/// such that a plot can always be traced back to its code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitTag {
    hash: Option<String>,
    dirty: bool,
}

impl GitTag {
    pub fn new(hash: Option<String>, dirty: bool) -> Self {
        Self {
            hash: hash.filter(|h| !h.trim().is_empty()),
            dirty,
        }
    }

    /// The revision this binary was built from, and whether the working tree had uncommitted changes.
    pub fn from_build() -> Self {
        Self::new(Some(build::COMMIT_HASH.to_string()), !build::GIT_CLEAN)
    }

    /// Whether the revision is known but the working tree had uncommitted changes
    pub fn is_dirty(&self) -> bool {
        self.hash.is_some() && self.dirty
    }

    /// First eight characters of the tag, as used in file names and plot annotations
    pub fn short(&self) -> String {
        self.to_string().chars().take(8).collect()
    }
}

impl fmt::Display for GitTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.hash {
            Some(hash) if self.dirty => write!(f, "{hash}-dirty"),
            Some(hash) => write!(f, "{hash}"),
            None => write!(f, "{NO_GIT_REPO}"),
        }
    }
}

pub fn prj_name_ver() -> String {
    format!("Uniform CLT v{}", build::PKG_VERSION)
}

pub fn created_by() -> String {
    format!("{} ({})", realname(), username())
}
