//! Stack option model: every category the interview asks about,
//! plus the assembled [`StackConfig`] result.

pub mod registry;

use serde::Serialize;
use std::fmt;

/// Base framework for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    NextjsApp,
    NextjsPages,
    ViteReact,
    Remix,
}

impl Framework {
    pub const ALL: &'static [Framework] = &[
        Framework::NextjsApp,
        Framework::NextjsPages,
        Framework::ViteReact,
        Framework::Remix,
    ];

    /// Stable identifier used in flags and generated metadata
    pub fn id(&self) -> &'static str {
        match self {
            Framework::NextjsApp => "nextjs-app",
            Framework::NextjsPages => "nextjs-pages",
            Framework::ViteReact => "vite-react",
            Framework::Remix => "remix",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::NextjsApp => "Next.js (App Router)",
            Framework::NextjsPages => "Next.js (Pages Router)",
            Framework::ViteReact => "Vite + React",
            Framework::Remix => "Remix",
        }
    }

    pub fn from_id(s: &str) -> Option<Framework> {
        Self::ALL.iter().copied().find(|f| f.id() == s)
    }

    /// Both Next.js flavors share config files and tsconfig shape
    pub fn is_nextjs(&self) -> bool {
        matches!(self, Framework::NextjsApp | Framework::NextjsPages)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Styling solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    Tailwind,
    CssModules,
    StyledComponents,
    None,
}

impl Styling {
    pub const ALL: &'static [Styling] = &[
        Styling::Tailwind,
        Styling::CssModules,
        Styling::StyledComponents,
        Styling::None,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Styling::Tailwind => "tailwind",
            Styling::CssModules => "css-modules",
            Styling::StyledComponents => "styled-components",
            Styling::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Styling::Tailwind => "Tailwind CSS",
            Styling::CssModules => "CSS Modules",
            Styling::StyledComponents => "Styled Components",
            Styling::None => "None",
        }
    }

    pub fn from_id(s: &str) -> Option<Styling> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// UI component kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiKit {
    Shadcn,
    Radix,
    Headless,
    None,
}

impl UiKit {
    pub const ALL: &'static [UiKit] =
        &[UiKit::Shadcn, UiKit::Radix, UiKit::Headless, UiKit::None];

    pub fn id(&self) -> &'static str {
        match self {
            UiKit::Shadcn => "shadcn",
            UiKit::Radix => "radix",
            UiKit::Headless => "headless",
            UiKit::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UiKit::Shadcn => "shadcn/ui",
            UiKit::Radix => "Radix UI",
            UiKit::Headless => "Headless UI",
            UiKit::None => "None",
        }
    }

    pub fn from_id(s: &str) -> Option<UiKit> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }
}

impl fmt::Display for UiKit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// State management library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateManagement {
    Zustand,
    Redux,
    Jotai,
    Context,
    None,
}

impl StateManagement {
    pub const ALL: &'static [StateManagement] = &[
        StateManagement::Zustand,
        StateManagement::Redux,
        StateManagement::Jotai,
        StateManagement::Context,
        StateManagement::None,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StateManagement::Zustand => "zustand",
            StateManagement::Redux => "redux",
            StateManagement::Jotai => "jotai",
            StateManagement::Context => "context",
            StateManagement::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StateManagement::Zustand => "Zustand",
            StateManagement::Redux => "Redux Toolkit",
            StateManagement::Jotai => "Jotai",
            StateManagement::Context => "Context API",
            StateManagement::None => "None",
        }
    }

    pub fn from_id(s: &str) -> Option<StateManagement> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }

    /// Context-only and "none" both mean: no packages, no store file
    pub fn adds_packages(&self) -> bool {
        !matches!(self, StateManagement::Context | StateManagement::None)
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Data fetching library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataFetching {
    TanstackQuery,
    Swr,
    Apollo,
    Fetch,
}

impl DataFetching {
    pub const ALL: &'static [DataFetching] = &[
        DataFetching::TanstackQuery,
        DataFetching::Swr,
        DataFetching::Apollo,
        DataFetching::Fetch,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DataFetching::TanstackQuery => "tanstack-query",
            DataFetching::Swr => "swr",
            DataFetching::Apollo => "apollo",
            DataFetching::Fetch => "fetch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DataFetching::TanstackQuery => "TanStack Query",
            DataFetching::Swr => "SWR",
            DataFetching::Apollo => "Apollo Client",
            DataFetching::Fetch => "fetch only",
        }
    }

    pub fn from_id(s: &str) -> Option<DataFetching> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }

    pub fn adds_packages(&self) -> bool {
        !matches!(self, DataFetching::Fetch)
    }
}

impl fmt::Display for DataFetching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Database / backend integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Database {
    Supabase,
    Firebase,
    Prisma,
    Mongodb,
    None,
}

impl Database {
    pub const ALL: &'static [Database] = &[
        Database::Supabase,
        Database::Firebase,
        Database::Prisma,
        Database::Mongodb,
        Database::None,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Database::Supabase => "supabase",
            Database::Firebase => "firebase",
            Database::Prisma => "prisma",
            Database::Mongodb => "mongodb",
            Database::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Database::Supabase => "Supabase",
            Database::Firebase => "Firebase",
            Database::Prisma => "Prisma + PostgreSQL",
            Database::Mongodb => "MongoDB",
            Database::None => "None",
        }
    }

    pub fn from_id(s: &str) -> Option<Database> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Authentication provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Auth {
    SupabaseAuth,
    Nextauth,
    Clerk,
    FirebaseAuth,
    None,
}

impl Auth {
    pub const ALL: &'static [Auth] = &[
        Auth::SupabaseAuth,
        Auth::Nextauth,
        Auth::Clerk,
        Auth::FirebaseAuth,
        Auth::None,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Auth::SupabaseAuth => "supabase-auth",
            Auth::Nextauth => "nextauth",
            Auth::Clerk => "clerk",
            Auth::FirebaseAuth => "firebase-auth",
            Auth::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Auth::SupabaseAuth => "Supabase Auth",
            Auth::Nextauth => "NextAuth.js",
            Auth::Clerk => "Clerk",
            Auth::FirebaseAuth => "Firebase Auth",
            Auth::None => "None",
        }
    }

    pub fn from_id(s: &str) -> Option<Auth> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }

    /// Supabase/Firebase auth ride on their database SDKs and add nothing
    /// of their own to package.json or the env template.
    pub fn adds_packages(&self) -> bool {
        matches!(self, Auth::Nextauth | Auth::Clerk)
    }
}

impl fmt::Display for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Additional tooling (multi-select)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraTool {
    Axios,
    DateFns,
    Zod,
    ReactHookForm,
    FramerMotion,
    LucideReact,
}

impl ExtraTool {
    pub const ALL: &'static [ExtraTool] = &[
        ExtraTool::Axios,
        ExtraTool::DateFns,
        ExtraTool::Zod,
        ExtraTool::ReactHookForm,
        ExtraTool::FramerMotion,
        ExtraTool::LucideReact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ExtraTool::Axios => "axios",
            ExtraTool::DateFns => "date-fns",
            ExtraTool::Zod => "zod",
            ExtraTool::ReactHookForm => "react-hook-form",
            ExtraTool::FramerMotion => "framer-motion",
            ExtraTool::LucideReact => "lucide-react",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExtraTool::Axios => "Axios",
            ExtraTool::DateFns => "date-fns",
            ExtraTool::Zod => "Zod (validation)",
            ExtraTool::ReactHookForm => "React Hook Form",
            ExtraTool::FramerMotion => "Framer Motion",
            ExtraTool::LucideReact => "Lucide Icons",
        }
    }

    pub fn from_id(s: &str) -> Option<ExtraTool> {
        Self::ALL.iter().copied().find(|v| v.id() == s)
    }
}

impl fmt::Display for ExtraTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Complete interview result
#[derive(Debug, Clone, Serialize)]
pub struct StackConfig {
    pub project_name: String,
    pub framework: Framework,
    pub styling: Styling,
    pub ui: UiKit,
    pub state_management: StateManagement,
    pub data_fetching: DataFetching,
    pub database: Database,
    pub auth: Auth,
    pub extra_tools: Vec<ExtraTool>,
    pub typescript: bool,
    pub git: bool,
    pub install: bool,
}

impl StackConfig {
    /// The interview defaults (what `--yes` accepts)
    pub fn defaults(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            framework: Framework::NextjsApp,
            styling: Styling::Tailwind,
            ui: UiKit::Shadcn,
            state_management: StateManagement::Zustand,
            data_fetching: DataFetching::TanstackQuery,
            database: Database::Supabase,
            auth: Auth::SupabaseAuth,
            extra_tools: Vec::new(),
            typescript: true,
            git: true,
            install: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for f in Framework::ALL {
            assert_eq!(Framework::from_id(f.id()), Some(*f));
        }
        for s in Styling::ALL {
            assert_eq!(Styling::from_id(s.id()), Some(*s));
        }
        for a in Auth::ALL {
            assert_eq!(Auth::from_id(a.id()), Some(*a));
        }
        for t in ExtraTool::ALL {
            assert_eq!(ExtraTool::from_id(t.id()), Some(*t));
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert_eq!(Framework::from_id("angular"), None);
        assert_eq!(Database::from_id(""), None);
    }

    #[test]
    fn test_package_gating_flags() {
        assert!(!StateManagement::Context.adds_packages());
        assert!(!StateManagement::None.adds_packages());
        assert!(StateManagement::Zustand.adds_packages());
        assert!(!DataFetching::Fetch.adds_packages());
        assert!(!Auth::SupabaseAuth.adds_packages());
        assert!(!Auth::FirebaseAuth.adds_packages());
        assert!(Auth::Nextauth.adds_packages());
    }

    #[test]
    fn test_serialized_ids_match() {
        let json = serde_json::to_string(&Framework::NextjsApp).unwrap();
        assert_eq!(json, "\"nextjs-app\"");
        let json = serde_json::to_string(&ExtraTool::ReactHookForm).unwrap();
        assert_eq!(json, "\"react-hook-form\"");
    }
}
