//! License headers for generated files.

use serde::Serialize;

use crate::defaults::Defaults;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    /// Uncommented header text; empty when no header is emitted.
    pub header: String,
}

const MIT_HEADER: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.";

const APACHE_HEADER: &str = "Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.";

const BSD3_HEADER: &str = "Use of this source code is governed by a BSD-style
license that can be found in the LICENSE file.";

const GPL3_HEADER: &str = "This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program. If not, see <http://www.gnu.org/licenses/>.";

const BUILTIN: &[(&str, &str)] = &[
    ("none", ""),
    ("MIT", MIT_HEADER),
    ("Apache-2.0", APACHE_HEADER),
    ("BSD-3-Clause", BSD3_HEADER),
    ("GPL-3.0", GPL3_HEADER),
];

pub fn builtin_names() -> Vec<String> {
    BUILTIN.iter().map(|(name, _)| name.to_string()).collect()
}

/// Find a built-in license by name (case-insensitive).
pub fn find(name: &str) -> Option<License> {
    BUILTIN
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
        .map(|(candidate, header)| License {
            name: candidate.to_string(),
            header: header.to_string(),
        })
}

/// Resolve the license configured in `defaults`.
pub fn resolve(defaults: &Defaults) -> Result<License> {
    if let Some(header) = &defaults.license_header {
        return Ok(License {
            name: "custom".to_string(),
            header: header.clone(),
        });
    }

    find(&defaults.license).ok_or_else(|| {
        Error::config_invalid_value(
            "license",
            Some(defaults.license.clone()),
            format!("Unknown license; expected one of {}", builtin_names().join(", ")),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_apache() {
        let license = resolve(&Defaults::default()).unwrap();
        assert_eq!(license.name, "Apache-2.0");
        assert!(license.header.starts_with("Licensed under the Apache License"));
    }

    #[test]
    fn none_has_empty_header() {
        let license = find("none").unwrap();
        assert!(license.header.is_empty());
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("mit").unwrap().name, "MIT");
        assert_eq!(find(" apache-2.0 ").unwrap().name, "Apache-2.0");
    }

    #[test]
    fn custom_header_wins() {
        let defaults = Defaults {
            license: "MIT".to_string(),
            license_header: Some("Internal use only.".to_string()),
            ..Defaults::default()
        };
        let license = resolve(&defaults).unwrap();
        assert_eq!(license.name, "custom");
        assert_eq!(license.header, "Internal use only.");
    }

    #[test]
    fn unknown_license_is_config_error() {
        let defaults = Defaults {
            license: "WTFPL".to_string(),
            ..Defaults::default()
        };
        let err = resolve(&defaults).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert_eq!(err.details["value"], "WTFPL");
    }
}
