//! Deterministic package.json assembly from the decision tables.

use crate::stack::registry::{
    auth_packages, data_fetching_packages, database_packages, framework_packages,
    framework_scripts, state_packages, styling_packages, tool_packages, ui_packages, PackageSet,
};
use crate::stack::{Database, StackConfig, Styling, UiKit};
use serde::Serialize;
use std::collections::BTreeMap;

/// The generated package.json document.
///
/// All maps are BTreeMaps so the serialized output is stable for a given
/// [`StackConfig`].
#[derive(Debug, Clone, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: &'static str,
    pub private: bool,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Compose the manifest for an interview result. Pure: no I/O.
    pub fn compose(config: &StackConfig) -> Self {
        let mut dependencies = Vec::new();
        let mut dev_dependencies = Vec::new();

        let mut push = |set: PackageSet, include_dev: bool| {
            dependencies.extend_from_slice(set.dependencies);
            if include_dev {
                dev_dependencies.extend_from_slice(set.dev_dependencies);
            }
        };

        // Framework dev deps are type packages + typescript; JS projects skip them
        push(framework_packages(config.framework), config.typescript);

        if config.styling != Styling::None {
            push(styling_packages(config.styling), true);
        }
        if config.ui != UiKit::None {
            push(ui_packages(config.ui), true);
        }
        if config.state_management.adds_packages() {
            push(state_packages(config.state_management), true);
        }
        if config.data_fetching.adds_packages() {
            push(data_fetching_packages(config.data_fetching), true);
        }
        if config.database != Database::None {
            push(database_packages(config.database), true);
        }
        if config.auth.adds_packages() {
            push(auth_packages(config.auth), true);
        }
        for tool in &config.extra_tools {
            push(tool_packages(*tool), true);
        }

        let scripts = framework_scripts(config.framework)
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            name: config.project_name.clone(),
            version: "0.1.0",
            private: true,
            scripts,
            dependencies: specs_to_map(&dependencies),
            dev_dependencies: specs_to_map(&dev_dependencies),
        }
    }

    /// Render as pretty JSON with a trailing newline
    pub fn to_json(&self) -> String {
        let mut out = serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| String::from("{}"));
        out.push('\n');
        out
    }
}

/// Split a `name@version` spec into its parts.
///
/// Handles scoped packages (`@org/pkg@^1.0.0`) where the leading `@` is part
/// of the name, and bare names which default to `latest`.
pub fn parse_spec(spec: &str) -> (&str, &str) {
    let at = if let Some(rest) = spec.strip_prefix('@') {
        // Version separator is the next '@' after the scope
        rest.find('@').map(|i| i + 1)
    } else {
        spec.find('@')
    };

    match at {
        Some(i) => (&spec[..i], &spec[i + 1..]),
        None => (spec, "latest"),
    }
}

fn specs_to_map(specs: &[&str]) -> BTreeMap<String, String> {
    specs
        .iter()
        .map(|spec| {
            let (name, version) = parse_spec(spec);
            (name.to_string(), version.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{Auth, DataFetching, ExtraTool, Framework, StateManagement};

    #[test]
    fn test_parse_plain_spec() {
        assert_eq!(parse_spec("next@^15.0.0"), ("next", "^15.0.0"));
        assert_eq!(parse_spec("tailwindcss@^3"), ("tailwindcss", "^3"));
    }

    #[test]
    fn test_parse_scoped_spec() {
        assert_eq!(
            parse_spec("@types/react@^19"),
            ("@types/react", "^19")
        );
        assert_eq!(
            parse_spec("@remix-run/node@^2.15.0"),
            ("@remix-run/node", "^2.15.0")
        );
    }

    #[test]
    fn test_parse_bare_name_defaults_to_latest() {
        assert_eq!(parse_spec("zustand"), ("zustand", "latest"));
        assert_eq!(parse_spec("@supabase/ssr"), ("@supabase/ssr", "latest"));
    }

    #[test]
    fn test_compose_defaults() {
        let manifest = PackageManifest::compose(&StackConfig::defaults("my-app"));

        assert_eq!(manifest.name, "my-app");
        assert_eq!(manifest.version, "0.1.0");
        assert!(manifest.private);
        assert_eq!(manifest.dependencies.get("next").unwrap(), "^15.0.0");
        assert_eq!(
            manifest.dependencies.get("@supabase/supabase-js").unwrap(),
            "latest"
        );
        // shadcn pulls in its helpers
        assert!(manifest.dependencies.contains_key("clsx"));
        assert!(manifest.dependencies.contains_key("tailwind-merge"));
        // Tailwind is dev-side
        assert_eq!(
            manifest.dev_dependencies.get("tailwindcss").unwrap(),
            "^3"
        );
        assert_eq!(manifest.scripts.get("dev").unwrap(), "next dev");
    }

    #[test]
    fn test_javascript_drops_type_packages() {
        let mut config = StackConfig::defaults("plain-js");
        config.typescript = false;
        let manifest = PackageManifest::compose(&config);

        assert!(!manifest.dev_dependencies.contains_key("typescript"));
        assert!(!manifest.dev_dependencies.contains_key("@types/react"));
        // Non-framework dev deps are unaffected
        assert!(manifest.dev_dependencies.contains_key("tailwindcss"));
    }

    #[test]
    fn test_passthrough_choices_add_nothing() {
        let mut config = StackConfig::defaults("lean");
        config.styling = Styling::None;
        config.ui = UiKit::None;
        config.state_management = StateManagement::Context;
        config.data_fetching = DataFetching::Fetch;
        config.database = Database::None;
        config.auth = Auth::None;

        let manifest = PackageManifest::compose(&config);
        let expected: Vec<&str> = vec!["next", "react", "react-dom"];
        let actual: Vec<&str> = manifest.dependencies.keys().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_supabase_auth_adds_no_packages_beyond_database() {
        let mut with_auth = StackConfig::defaults("a");
        with_auth.auth = Auth::SupabaseAuth;
        let mut without_auth = StackConfig::defaults("a");
        without_auth.auth = Auth::None;

        assert_eq!(
            PackageManifest::compose(&with_auth).dependencies,
            PackageManifest::compose(&without_auth).dependencies
        );
    }

    #[test]
    fn test_extra_tools_land_in_dependencies() {
        let mut config = StackConfig::defaults("tools");
        config.extra_tools = vec![ExtraTool::Zod, ExtraTool::FramerMotion];
        let manifest = PackageManifest::compose(&config);

        assert_eq!(manifest.dependencies.get("zod").unwrap(), "latest");
        assert!(manifest.dependencies.contains_key("framer-motion"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let config = StackConfig::defaults("stable");
        let a = PackageManifest::compose(&config).to_json();
        let b = PackageManifest::compose(&config).to_json();
        assert_eq!(a, b);
        assert!(a.ends_with('\n'));
    }

    #[test]
    fn test_remix_scripts() {
        let mut config = StackConfig::defaults("remix-app");
        config.framework = Framework::Remix;
        let manifest = PackageManifest::compose(&config);
        assert_eq!(manifest.scripts.get("start").unwrap(), "remix-serve build");
        assert_eq!(manifest.scripts.get("typecheck").unwrap(), "tsc");
    }
}
