// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parses and expands the path templates found in discovery documents.
//!
//! Templates use a subset of [RFC 6570]: `{name}` performs simple string
//! expansion, where every character outside the unreserved set is
//! percent-encoded (including `/`), and `{+name}` performs reserved
//! expansion, where reserved characters such as `/` are kept verbatim.
//!
//! [RFC 6570]: https://datatracker.ietf.org/doc/html/rfc6570

use crate::error::binding::BindingError;
use crate::error::definition::DefinitionError;
use crate::params::ParameterValue;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters encoded by simple expansion: everything but `ALPHA / DIGIT /
/// "-" / "." / "_" / "~"`.
const SIMPLE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters encoded by reserved expansion: the reserved set passes through.
const RESERVED: &AsciiSet = &SIMPLE
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Variable { name: String, reserved: bool },
}

/// A parsed path template, such as `accounts/{accountId}/adclients`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTemplate {
    template: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses `template`.
    ///
    /// Fails on unbalanced braces, on empty or malformed variable names, and
    /// on variables that appear more than once.
    pub fn parse<T: Into<String>>(template: T) -> Result<Self, DefinitionError> {
        let template = template.into();
        let invalid = |problem: &str| DefinitionError::InvalidTemplate {
            template: template.clone(),
            problem: problem.to_string(),
        };
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(invalid("nested `{`")),
                            c => name.push(c),
                        }
                    }
                    if !closed {
                        return Err(invalid("missing `}`"));
                    }
                    let (name, reserved) = match name.strip_prefix('+') {
                        Some(n) => (n.to_string(), true),
                        None => (name, false),
                    };
                    if name.is_empty() {
                        return Err(invalid("empty variable name"));
                    }
                    if !name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
                    {
                        return Err(invalid(&format!("unsupported variable `{name}`")));
                    }
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Variable { name: n, .. } if *n == name));
                    if duplicate {
                        return Err(invalid(&format!("variable `{name}` appears twice")));
                    }
                    segments.push(Segment::Variable { name, reserved });
                }
                '}' => return Err(invalid("unmatched `}`")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { template, segments })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// The names of the variables, in the order they appear.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if `name` is one of the template variables.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables().any(|v| v == name)
    }

    /// Substitutes the variables using `lookup`.
    ///
    /// Lists are expanded as comma-separated values, each value encoded on
    /// its own. Fails if a variable produces a `.` or `..` path segment.
    pub fn expand<'a, F>(&self, lookup: F) -> Result<String, BindingError>
    where
        F: Fn(&str) -> Option<&'a ParameterValue>,
    {
        let mut path = String::with_capacity(self.template.len());
        let mut spans = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(l) => path.push_str(l),
                Segment::Variable { name, reserved } => {
                    let value =
                        lookup(name).ok_or_else(|| BindingError::MissingParameter(name.clone()))?;
                    let set = if *reserved { RESERVED } else { SIMPLE };
                    let encoded = value
                        .wire_values()
                        .iter()
                        .map(|v| utf8_percent_encode(v, set).to_string())
                        .collect::<Vec<_>>()
                        .join(",");
                    if encoded.is_empty() {
                        return Err(BindingError::EmptyValue(name.clone()));
                    }
                    spans.push((path.len(), path.len() + encoded.len(), name.as_str()));
                    path.push_str(&encoded);
                }
            }
        }
        check_dot_segments(&path, &spans)?;
        Ok(path)
    }
}

/// Rejects `.` and `..` segments that overlap a variable.
///
/// `%` is always encoded, so `%2E` and friends cannot appear in a value.
fn check_dot_segments(path: &str, spans: &[(usize, usize, &str)]) -> Result<(), BindingError> {
    let mut start = 0;
    for segment in path.split('/') {
        let end = start + segment.len();
        let variable = spans
            .iter()
            .find(|(s, e, _)| *s < end && start < *e)
            .filter(|_| segment == "." || segment == "..");
        if let Some((_, _, name)) = variable {
            return Err(BindingError::InvalidValue(name.to_string()));
        }
        start = end + 1;
    }
    Ok(())
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.template)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::Params;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn variables() -> TestResult {
        let t = PathTemplate::parse("{projectId}/regions/{region}/deployments/{deploymentName}")?;
        let got = t.variables().collect::<Vec<_>>();
        assert_eq!(got, vec!["projectId", "region", "deploymentName"]);
        assert!(t.has_variable("region"));
        assert!(!t.has_variable("zone"));
        assert_eq!(t.as_str(), t.to_string());
        Ok(())
    }

    #[test]
    fn no_variables() -> TestResult {
        let t = PathTemplate::parse("accounts")?;
        assert_eq!(t.variables().count(), 0);
        assert_eq!(t.expand(|_| None)?, "accounts");
        Ok(())
    }

    #[test_case("accounts/{accountId", "missing `}`")]
    #[test_case("accounts/accountId}", "unmatched `}`")]
    #[test_case("accounts/{{accountId}}", "nested `{`")]
    #[test_case("accounts/{}", "empty variable name")]
    #[test_case("accounts/{+}", "empty variable name")]
    #[test_case("accounts/{/id}", "unsupported variable")]
    #[test_case("{a}/{a}", "appears twice")]
    fn parse_errors(input: &str, want: &str) {
        let got = PathTemplate::parse(input);
        assert!(
            matches!(&got, Err(DefinitionError::InvalidTemplate { problem, .. }) if problem.contains(want)),
            "{got:?}"
        );
    }

    #[test_case("12345", "accounts/12345")]
    #[test_case("a b", "accounts/a%20b")]
    #[test_case("a/b", "accounts/a%2Fb")]
    #[test_case("ca-pub-1:2", "accounts/ca-pub-1%3A2")]
    #[test_case("üñí", "accounts/%C3%BC%C3%B1%C3%AD")]
    fn simple_expansion(value: &str, want: &str) -> TestResult {
        let t = PathTemplate::parse("accounts/{accountId}")?;
        let params = Params::new().set("accountId", value);
        assert_eq!(t.expand(|n| params.get(n))?, want);
        Ok(())
    }

    #[test_case("b/o/object", "b/o/object")]
    #[test_case("b/o/with space", "b/o/with%20space")]
    fn reserved_expansion(value: &str, want: &str) -> TestResult {
        let t = PathTemplate::parse("{+name}")?;
        let params = Params::new().set("name", value);
        assert_eq!(t.expand(|n| params.get(n))?, want);
        Ok(())
    }

    #[test]
    fn list_expansion() -> TestResult {
        let t = PathTemplate::parse("ids/{ids}")?;
        let params = Params::new().set("ids", ["a", "b/c"]);
        assert_eq!(t.expand(|n| params.get(n))?, "ids/a,b%2Fc");
        Ok(())
    }

    #[test]
    fn missing() -> TestResult {
        let t = PathTemplate::parse("accounts/{accountId}/adclients/{adClientId}")?;
        let params = Params::new().set("accountId", "12345");
        let got = t.expand(|n| params.get(n));
        assert_eq!(got, Err(BindingError::MissingParameter("adClientId".into())));
        Ok(())
    }

    #[test_case("accounts/{accountId}/adclients", "..")]
    #[test_case("accounts/{accountId}/adclients", ".")]
    #[test_case("accounts/{accountId}", "..")]
    #[test_case("{accountId}/adclients", ".")]
    #[test_case("{+name}", "b/../o")]
    #[test_case("{+name}", "./o")]
    #[test_case("{+name}", "b/o/..")]
    fn dot_segments(template: &str, value: &str) -> TestResult {
        let t = PathTemplate::parse(template)?;
        let name = t.variables().next().unwrap_or_default().to_string();
        let params = Params::new().set(name.as_str(), value);
        let got = t.expand(|n| params.get(n));
        assert_eq!(got, Err(BindingError::InvalidValue(name)));
        Ok(())
    }

    #[test_case("accounts/{accountId}", "...", "accounts/...")]
    #[test_case("accounts/{accountId}", "a.b", "accounts/a.b")]
    #[test_case("accounts/{accountId}", "%2e%2e", "accounts/%252e%252e")]
    #[test_case("v{version}/x", ".", "v./x")]
    #[test_case("{+name}", "b/..o", "b/..o")]
    fn dots_inside_segments(template: &str, value: &str, want: &str) -> TestResult {
        let t = PathTemplate::parse(template)?;
        let name = t.variables().next().unwrap_or_default().to_string();
        let params = Params::new().set(name.as_str(), value);
        assert_eq!(t.expand(|n| params.get(n))?, want);
        Ok(())
    }

    #[test]
    fn empty() -> TestResult {
        let t = PathTemplate::parse("accounts/{accountId}")?;
        let params = Params::new().set("accountId", "");
        let got = t.expand(|n| params.get(n));
        assert_eq!(got, Err(BindingError::EmptyValue("accountId".into())));
        Ok(())
    }
}
