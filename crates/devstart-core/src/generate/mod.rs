//! Project skeleton generation.
//!
//! Writes every file for the selected stack into the target directory and
//! reports what was written. Pure decisions live in [`crate::manifest`] and
//! [`crate::stack::registry`]; this module only materializes them.

pub mod favicon;
pub mod files;

use crate::manifest::PackageManifest;
use crate::stack::registry::{auth_env, database_env, framework_scripts};
use crate::stack::{Auth, DataFetching, Database, Framework, StackConfig, Styling};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Folders every project gets regardless of stack
const PROJECT_FOLDERS: &[&str] = &["components", "lib", "hooks", "types", "public"];

/// Generate the complete project skeleton in `project_dir`.
///
/// Returns the relative paths of every file written, in write order.
/// The caller is expected to have validated the target path first; this
/// function will happily write into an existing directory.
pub async fn generate_project(config: &StackConfig, project_dir: &Path) -> Result<Vec<String>> {
    let mut writer = ProjectWriter::new(project_dir);

    fs::create_dir_all(project_dir)
        .await
        .context("Failed to create project directory")?;

    write_base_files(config, &mut writer).await?;
    write_conditional_files(config, &mut writer).await?;

    writer
        .write("package.json", PackageManifest::compose(config).to_json())
        .await?;
    writer
        .write(".env.local.example", env_example(config))
        .await?;
    writer.write("README.md", readme(config)).await?;
    writer.write(".gitignore", files::gitignore()).await?;

    for folder in PROJECT_FOLDERS {
        fs::create_dir_all(project_dir.join(folder))
            .await
            .with_context(|| format!("Failed to create folder: {folder}"))?;
    }

    let initials = favicon::project_initials(&config.project_name);
    writer
        .write("public/favicon.svg", favicon::favicon_svg(&initials))
        .await?;

    Ok(writer.into_files())
}

/// Tracks written files and creates parent directories on demand
struct ProjectWriter<'a> {
    root: &'a Path,
    files: Vec<String>,
}

impl<'a> ProjectWriter<'a> {
    fn new(root: &'a Path) -> Self {
        Self {
            root,
            files: Vec::new(),
        }
    }

    async fn write(&mut self, rel_path: &str, content: impl AsRef<[u8]>) -> Result<()> {
        let target = self.root.join(rel_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, content.as_ref())
            .await
            .with_context(|| format!("Failed to write file: {}", target.display()))?;
        self.files.push(rel_path.to_string());
        Ok(())
    }

    fn into_files(self) -> Vec<String> {
        self.files
    }
}

async fn write_base_files(config: &StackConfig, w: &mut ProjectWriter<'_>) -> Result<()> {
    let name = config.project_name.as_str();
    let ext = files::component_ext(config.typescript);
    let has_tailwind = config.styling == Styling::Tailwind;

    match config.framework {
        Framework::NextjsApp => {
            w.write(&format!("app/layout.{ext}"), files::next_app_layout(name))
                .await?;
            w.write(&format!("app/page.{ext}"), files::next_app_page(name))
                .await?;
            w.write("app/globals.css", files::globals_css(has_tailwind))
                .await?;
            w.write("next.config.js", files::next_config_js()).await?;
        }
        Framework::NextjsPages => {
            w.write(&format!("pages/_app.{ext}"), files::next_pages_app())
                .await?;
            w.write(&format!("pages/index.{ext}"), files::next_pages_index(name))
                .await?;
            w.write("styles/globals.css", files::globals_css(has_tailwind))
                .await?;
            w.write("next.config.js", files::next_config_js()).await?;
        }
        Framework::ViteReact => {
            w.write("index.html", files::vite_index_html(name, config.typescript))
                .await?;
            w.write(
                &format!("src/main.{ext}"),
                files::vite_main(config.typescript),
            )
            .await?;
            w.write(&format!("src/App.{ext}"), files::vite_app(name))
                .await?;
            w.write("src/index.css", files::globals_css(has_tailwind))
                .await?;
            w.write(
                &format!("vite.config.{}", files::source_ext(config.typescript)),
                files::vite_config(),
            )
            .await?;
        }
        Framework::Remix => {
            w.write(&format!("app/root.{ext}"), files::remix_root())
                .await?;
            w.write(&format!("app/routes/_index.{ext}"), files::remix_index(name))
                .await?;
        }
    }

    if config.typescript {
        let tsconfig = if config.framework.is_nextjs() {
            files::tsconfig_nextjs()
        } else {
            files::tsconfig_vite()
        };
        let mut json = serde_json::to_string_pretty(&tsconfig)?;
        json.push('\n');
        w.write("tsconfig.json", json).await?;
    }

    Ok(())
}

async fn write_conditional_files(config: &StackConfig, w: &mut ProjectWriter<'_>) -> Result<()> {
    if config.styling == Styling::Tailwind {
        w.write("tailwind.config.js", files::tailwind_config_js())
            .await?;
        w.write("postcss.config.js", files::postcss_config_js())
            .await?;
    }

    if config.data_fetching == DataFetching::Swr {
        let ext = files::component_ext(config.typescript);
        w.write(&format!("lib/swr-provider.{ext}"), files::swr_provider())
            .await?;
    }

    if config.auth == Auth::Nextauth {
        let ext = files::source_ext(config.typescript);
        w.write(&format!("lib/auth.{ext}"), files::nextauth_config())
            .await?;
    }

    Ok(())
}

/// Build the `.env.local.example` content, grouped by integration
pub fn env_example(config: &StackConfig) -> String {
    let mut out = String::from("# Environment Variables\n\n");

    if config.database != Database::None {
        let lines = database_env(config.database);
        if !lines.is_empty() {
            out.push_str(&format!("# {}\n", config.database.id().to_uppercase()));
            out.push_str(&lines.join("\n"));
            out.push_str("\n\n");
        }
    }

    if config.auth.adds_packages() {
        let lines = auth_env(config.auth);
        if !lines.is_empty() {
            out.push_str(&format!("# {}\n", config.auth.id().to_uppercase()));
            out.push_str(&lines.join("\n"));
            out.push_str("\n\n");
        }
    }

    out
}

/// Build the project README summarizing the chosen stack
pub fn readme(config: &StackConfig) -> String {
    let scripts: String = framework_scripts(config.framework)
        .iter()
        .map(|(name, cmd)| format!("- `npm run {name}` - {cmd}\n"))
        .collect();

    format!(
        r#"# {name}

Built with DevStart CLI

## Stack

- **Framework**: {framework}
- **Styling**: {styling}
- **UI Components**: {ui}
- **State Management**: {state}
- **Data Fetching**: {data}
- **Database**: {database}
- **Authentication**: {auth}

## Getting Started

1. Install dependencies:
```bash
npm install
```

2. Copy environment variables:
```bash
cp .env.local.example .env.local
```

3. Add your environment variables to `.env.local`

4. Run the development server:
```bash
npm run dev
```

5. Open [http://localhost:3000](http://localhost:3000) in your browser

## Available Scripts

{scripts}
## Learn More

- [Next.js Documentation](https://nextjs.org/docs)
- [Tailwind CSS](https://tailwindcss.com)

## Deploy

Deploy your application using [Vercel](https://vercel.com) or any other hosting platform.

---

Built with DevStart CLI
"#,
        name = config.project_name,
        framework = config.framework,
        styling = config.styling,
        ui = config.ui,
        state = config.state_management,
        data = config.data_fetching,
        database = config.database,
        auth = config.auth,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::StateManagement;
    use tempfile::tempdir;

    fn config() -> StackConfig {
        StackConfig::defaults("demo-app")
    }

    #[tokio::test]
    async fn test_generate_default_project() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("demo-app");

        let written = generate_project(&config(), &root).await.unwrap();

        assert!(root.join("app/layout.tsx").exists());
        assert!(root.join("app/page.tsx").exists());
        assert!(root.join("package.json").exists());
        assert!(root.join(".env.local.example").exists());
        assert!(root.join("README.md").exists());
        assert!(root.join(".gitignore").exists());
        assert!(root.join("tailwind.config.js").exists());
        assert!(root.join("postcss.config.js").exists());
        assert!(root.join("tsconfig.json").exists());
        assert!(root.join("public/favicon.svg").exists());
        for folder in PROJECT_FOLDERS {
            assert!(root.join(folder).is_dir(), "{folder}");
        }

        assert!(written.contains(&"package.json".to_string()));
        assert!(written.contains(&"app/page.tsx".to_string()));
    }

    #[tokio::test]
    async fn test_javascript_project_uses_jsx() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("plain");
        let mut cfg = config();
        cfg.typescript = false;

        generate_project(&cfg, &root).await.unwrap();

        assert!(root.join("app/layout.jsx").exists());
        assert!(!root.join("tsconfig.json").exists());
    }

    #[tokio::test]
    async fn test_conditional_files_follow_selection() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("lean");
        let mut cfg = config();
        cfg.styling = Styling::CssModules;
        cfg.data_fetching = DataFetching::Swr;
        cfg.auth = Auth::Nextauth;
        cfg.state_management = StateManagement::Context;

        generate_project(&cfg, &root).await.unwrap();

        assert!(!root.join("tailwind.config.js").exists());
        assert!(root.join("lib/swr-provider.tsx").exists());
        assert!(root.join("lib/auth.ts").exists());
    }

    #[tokio::test]
    async fn test_vite_layout() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("vite-app");
        let mut cfg = config();
        cfg.framework = Framework::ViteReact;

        generate_project(&cfg, &root).await.unwrap();

        assert!(root.join("index.html").exists());
        assert!(root.join("src/main.tsx").exists());
        assert!(root.join("vite.config.ts").exists());
        assert!(!root.join("next.config.js").exists());
    }

    #[test]
    fn test_env_example_groups_by_integration() {
        let env = env_example(&config());
        // Default stack: supabase database, supabase auth (no extra env)
        assert!(env.contains("# SUPABASE\n"));
        assert!(env.contains("NEXT_PUBLIC_SUPABASE_URL=your-project-url"));
        assert!(!env.contains("NEXTAUTH"));
    }

    #[test]
    fn test_env_example_nextauth_section() {
        let mut cfg = config();
        cfg.database = Database::Prisma;
        cfg.auth = Auth::Nextauth;
        let env = env_example(&cfg);
        assert!(env.contains("# PRISMA\n"));
        assert!(env.contains("DATABASE_URL="));
        assert!(env.contains("# NEXTAUTH\n"));
        assert!(env.contains("NEXTAUTH_SECRET=your-secret-key"));
    }

    #[test]
    fn test_readme_lists_stack_and_scripts() {
        let text = readme(&config());
        assert!(text.contains("# demo-app"));
        assert!(text.contains("**Framework**: Next.js (App Router)"));
        assert!(text.contains("`npm run dev` - next dev"));
    }
}
