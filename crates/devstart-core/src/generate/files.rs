//! Literal file templates for the generated project.
//!
//! These are plain strings with the project name interpolated where needed;
//! there is deliberately no templating engine behind them.

/// File extension for React component files
pub fn component_ext(typescript: bool) -> &'static str {
    if typescript {
        "tsx"
    } else {
        "jsx"
    }
}

/// File extension for plain source/config files
pub fn source_ext(typescript: bool) -> &'static str {
    if typescript {
        "ts"
    } else {
        "js"
    }
}

pub fn next_app_layout(project_name: &str) -> String {
    format!(
        r#"import type {{ Metadata }} from 'next'
import './globals.css'

export const metadata: Metadata = {{
  title: '{project_name}',
  description: 'Built with DevStart CLI',
}}

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode
}}) {{
  return (
    <html lang="en">
      <body>{{children}}</body>
    </html>
  )
}}
"#
    )
}

pub fn next_app_page(project_name: &str) -> String {
    format!(
        r#"export default function Home() {{
  return (
    <main className="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800">
      <div className="container mx-auto px-4 py-16">
        <div className="max-w-4xl mx-auto">
          <h1 className="text-5xl md:text-6xl font-bold text-gray-900 dark:text-white mb-6">
            Welcome to {project_name}
          </h1>
          <p className="text-xl text-gray-600 dark:text-gray-300 mb-8">
            Built with DevStart CLI
          </p>

          <div className="mt-12 p-6 bg-blue-50 dark:bg-blue-900/20 rounded-lg border border-blue-200 dark:border-blue-800">
            <h3 className="text-lg font-semibold text-blue-900 dark:text-blue-100 mb-2">
              Getting Started
            </h3>
            <p className="text-blue-800 dark:text-blue-200 mb-4">
              Edit <code className="bg-blue-100 dark:bg-blue-900 px-2 py-1 rounded text-sm">app/page.tsx</code> to customize this page
            </p>
            <a
              href="https://nextjs.org/docs"
              className="inline-block bg-blue-600 hover:bg-blue-700 text-white font-medium px-6 py-2 rounded-lg transition-colors"
              target="_blank"
              rel="noopener noreferrer"
            >
              Read the docs
            </a>
          </div>
        </div>
      </div>
    </main>
  )
}}
"#
    )
}

pub fn next_pages_app() -> String {
    r#"import '../styles/globals.css'
import type { AppProps } from 'next/app'

export default function App({ Component, pageProps }: AppProps) {
  return <Component {...pageProps} />
}
"#
    .to_string()
}

pub fn next_pages_index(project_name: &str) -> String {
    format!(
        r#"export default function Home() {{
  return (
    <main className="min-h-screen container mx-auto px-4 py-16">
      <h1 className="text-5xl font-bold mb-6">Welcome to {project_name}</h1>
      <p className="text-xl text-gray-600 mb-8">Built with DevStart CLI</p>
      <p>
        Edit <code>pages/index.tsx</code> to customize this page
      </p>
    </main>
  )
}}
"#
    )
}

pub fn globals_css(has_tailwind: bool) -> String {
    if has_tailwind {
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n".to_string()
    } else {
        r#"html,
body {
  padding: 0;
  margin: 0;
  font-family: system-ui, -apple-system, sans-serif;
}

* {
  box-sizing: border-box;
}
"#
        .to_string()
    }
}

pub fn next_config_js() -> String {
    r#"/** @type {import('next').NextConfig} */
const nextConfig = {}

module.exports = nextConfig
"#
    .to_string()
}

pub fn tsconfig_nextjs() -> serde_json::Value {
    serde_json::json!({
        "compilerOptions": {
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": true,
            "skipLibCheck": true,
            "strict": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": { "@/*": ["./*"] }
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules"]
    })
}

pub fn tsconfig_vite() -> serde_json::Value {
    serde_json::json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true
        },
        "include": ["src", "app"]
    })
}

pub fn vite_config() -> String {
    r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
})
"#
    .to_string()
}

pub fn vite_index_html(project_name: &str, typescript: bool) -> String {
    let ext = component_ext(typescript);
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{project_name}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.{ext}"></script>
  </body>
</html>
"#
    )
}

pub fn vite_main(typescript: bool) -> String {
    let ext = component_ext(typescript);
    // The non-null assertion only exists in TypeScript
    let root = if typescript {
        "document.getElementById('root')!"
    } else {
        "document.getElementById('root')"
    };
    format!(
        r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.{ext}'
import './index.css'

ReactDOM.createRoot({root}).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#
    )
}

pub fn vite_app(project_name: &str) -> String {
    format!(
        r#"export default function App() {{
  return (
    <main>
      <h1>Welcome to {project_name}</h1>
      <p>Built with DevStart CLI</p>
    </main>
  )
}}
"#
    )
}

pub fn remix_root() -> String {
    r#"import {
  Links,
  Meta,
  Outlet,
  Scripts,
  ScrollRestoration,
} from '@remix-run/react'

export default function App() {
  return (
    <html lang="en">
      <head>
        <meta charSet="utf-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <Meta />
        <Links />
      </head>
      <body>
        <Outlet />
        <ScrollRestoration />
        <Scripts />
      </body>
    </html>
  )
}
"#
    .to_string()
}

pub fn remix_index(project_name: &str) -> String {
    format!(
        r#"export default function Index() {{
  return (
    <main>
      <h1>Welcome to {project_name}</h1>
      <p>Built with DevStart CLI</p>
    </main>
  )
}}
"#
    )
}

pub fn tailwind_config_js() -> String {
    r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    './pages/**/*.{js,ts,jsx,tsx,mdx}',
    './components/**/*.{js,ts,jsx,tsx,mdx}',
    './app/**/*.{js,ts,jsx,tsx,mdx}',
    './src/**/*.{js,ts,jsx,tsx,mdx}',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#
    .to_string()
}

pub fn postcss_config_js() -> String {
    r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#
    .to_string()
}

pub fn swr_provider() -> String {
    r#"'use client'

import { SWRConfig } from 'swr'

const fetcher = (url: string) => fetch(url).then((res) => res.json())

export function SWRProvider({ children }: { children: React.ReactNode }) {
  return (
    <SWRConfig
      value={{
        fetcher,
        revalidateOnFocus: false,
        revalidateOnReconnect: true,
        shouldRetryOnError: true,
        dedupingInterval: 2000,
      }}
    >
      {children}
    </SWRConfig>
  )
}
"#
    .to_string()
}

pub fn nextauth_config() -> String {
    r#"// Auth.js v5 (NextAuth)
// Add providers in .env.local:
// - AUTH_GITHUB_ID, AUTH_GITHUB_SECRET
// - AUTH_GOOGLE_ID, AUTH_GOOGLE_SECRET
// - AUTH_SECRET (generate with: npx auth secret)

import NextAuth from "next-auth"
import GitHub from "next-auth/providers/github"
import Google from "next-auth/providers/google"

export const { handlers, auth, signIn, signOut } = NextAuth({
  providers: [
    GitHub,
    Google,
  ],
  callbacks: {
    authorized: async ({ auth }) => {
      // Return true if user is authenticated
      return !!auth
    },
  },
})
"#
    .to_string()
}

pub fn gitignore() -> String {
    r#"# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local
.env

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_interpolates_name() {
        let layout = next_app_layout("todo-board");
        assert!(layout.contains("title: 'todo-board'"));
        assert!(layout.contains("RootLayout"));
    }

    #[test]
    fn test_globals_css_follows_styling() {
        assert!(globals_css(true).contains("@tailwind base;"));
        assert!(!globals_css(false).contains("@tailwind"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(component_ext(true), "tsx");
        assert_eq!(component_ext(false), "jsx");
        assert_eq!(source_ext(false), "js");
    }

    #[test]
    fn test_vite_entry_points_at_selected_extension() {
        assert!(vite_index_html("app", true).contains("/src/main.tsx"));
        assert!(vite_index_html("app", false).contains("/src/main.jsx"));
        assert!(vite_main(false).contains("./App.jsx"));
    }

    #[test]
    fn test_tsconfig_shapes() {
        let next = tsconfig_nextjs();
        assert_eq!(next["compilerOptions"]["jsx"], "preserve");
        let vite = tsconfig_vite();
        assert_eq!(vite["compilerOptions"]["jsx"], "react-jsx");
    }
}
