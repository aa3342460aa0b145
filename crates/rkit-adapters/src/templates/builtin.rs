//! Built-in template trees, compiled into the binary.
//!
//! Content strings use `{{VARIABLE}}` placeholders resolved by the render
//! context at generation time. Paths inside a tree are relative to the
//! mount point chosen by the composition plan, so the same tree can land
//! under `src/pages` or `src/components` without knowing which.

use rkit_core::{
    application::ports::TemplateStore,
    domain::{TemplateSource, TemplateTree, TemplateTreeId},
    error::RkitResult,
};

// ── base tree ────────────────────────────────────────────────────────────────

const BASE_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{PROJECT_NAME_KEBAB}}</title>
  </head>
  <body>
    <noscript>You need to enable JavaScript to run this app.</noscript>
    <div id="root"></div>
  </body>
</html>
"#;

const BASE_INDEX_TSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import './index.css';
import App from './App';

const root = ReactDOM.createRoot(
  document.getElementById('root') as HTMLElement
);
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#;

const BASE_APP_TSX: &str = r#"import React from 'react';
import './App.css';

function App() {
  return (
    <div className="App">
      <header className="App-header">
        <h1>{{PROJECT_NAME}}</h1>
        <p>Edit <code>src/App.tsx</code> and save to reload.</p>
      </header>
    </div>
  );
}

export default App;
"#;

const BASE_APP_CSS: &str = r#".App {
  text-align: center;
}

.App-header {
  background-color: #282c34;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  font-size: calc(10px + 2vmin);
  color: white;
}
"#;

const BASE_INDEX_CSS: &str = r#"body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto',
    'Oxygen', 'Ubuntu', 'Cantarell', sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

code {
  font-family: source-code-pro, Menlo, Monaco, Consolas, 'Courier New',
    monospace;
}
"#;

const BASE_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es5",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "esModuleInterop": true,
    "allowSyntheticDefaultImports": true,
    "strict": true,
    "forceConsistentCasingInFileNames": true,
    "noFallthroughCasesInSwitch": true,
    "module": "esnext",
    "moduleResolution": "node",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx"
  },
  "include": ["src"]
}
"#;

const BASE_GITIGNORE: &str = r#"# dependencies
/node_modules

# testing
/coverage

# production
/build

# misc
.DS_Store
.env.local
.env.development.local
.env.test.local
.env.production.local

npm-debug.log*
yarn-debug.log*
yarn-error.log*
"#;

const BASE_README: &str = r#"# {{PROJECT_NAME}}

Bootstrapped with rkit.

- UI library: {{UI_LIBRARY}}
- State management: {{STATE_MANAGEMENT}}
- Data fetching: {{DATA_FETCHING}}

## Available Scripts

- `npm start` — run the app in development mode
- `npm test` — launch the test runner
- `npm run build` — build for production
"#;

// ── UI library components ────────────────────────────────────────────────────

const MUI_BUTTON_TSX: &str = r#"import React from 'react';
import Button from '@mui/material/Button';

export interface AppButtonProps {
  label: string;
  onClick?: () => void;
}

export function AppButton({ label, onClick }: AppButtonProps) {
  return (
    <Button variant="contained" onClick={onClick}>
      {label}
    </Button>
  );
}

export default AppButton;
"#;

const MUI_THEME_TS: &str = r#"import { createTheme } from '@mui/material/styles';

export const theme = createTheme({
  palette: {
    primary: {
      main: '#1976d2',
    },
    secondary: {
      main: '#9c27b0',
    },
  },
});
"#;

const ANTD_BUTTON_TSX: &str = r#"import React from 'react';
import { Button } from 'antd';

export interface AppButtonProps {
  label: string;
  onClick?: () => void;
}

export function AppButton({ label, onClick }: AppButtonProps) {
  return (
    <Button type="primary" onClick={onClick}>
      {label}
    </Button>
  );
}

export default AppButton;
"#;

const ANTD_LAYOUT_TSX: &str = r#"import React from 'react';
import { Layout } from 'antd';

const { Header, Content, Footer } = Layout;

export function AppLayout({ children }: { children: React.ReactNode }) {
  return (
    <Layout>
      <Header>{{PROJECT_NAME}}</Header>
      <Content style={{ padding: '24px' }}>{children}</Content>
      <Footer style={{ textAlign: 'center' }}>{{PROJECT_NAME_KEBAB}}</Footer>
    </Layout>
  );
}

export default AppLayout;
"#;

// Fallback when no component library is selected: same AppButton surface,
// styled with plain CSS, no packages recorded.
const CSS_BUTTON_TSX: &str = r#"import React from 'react';
import './AppButton.css';

export interface AppButtonProps {
  label: string;
  onClick?: () => void;
}

export function AppButton({ label, onClick }: AppButtonProps) {
  return (
    <button className="app-button" onClick={onClick}>
      {label}
    </button>
  );
}

export default AppButton;
"#;

const CSS_BUTTON_CSS: &str = r#".app-button {
  padding: 8px 16px;
  border: none;
  border-radius: 4px;
  background-color: #1976d2;
  color: white;
  font-size: 1rem;
  cursor: pointer;
}

.app-button:hover {
  background-color: #1565c0;
}
"#;

// ── data fetching examples ───────────────────────────────────────────────────

const REACT_QUERY_USERS_TSX: &str = r#"import React from 'react';
import { useQuery } from '@tanstack/react-query';

interface User {
  id: number;
  name: string;
}

async function fetchUsers(): Promise<User[]> {
  const response = await fetch('https://jsonplaceholder.typicode.com/users');
  if (!response.ok) {
    throw new Error(`Request failed: ${response.status}`);
  }
  return response.json();
}

export function Users() {
  const { data, isLoading, error } = useQuery({
    queryKey: ['users'],
    queryFn: fetchUsers,
  });

  if (isLoading) return <p>Loading...</p>;
  if (error) return <p>Failed to load users.</p>;

  return (
    <ul>
      {data?.map((user) => (
        <li key={user.id}>{user.name}</li>
      ))}
    </ul>
  );
}

export default Users;
"#;

const REACT_QUERY_CLIENT_TS: &str = r#"import { QueryClient } from '@tanstack/react-query';

export const queryClient = new QueryClient({
  defaultOptions: {
    queries: {
      retry: 1,
      staleTime: 30_000,
    },
  },
});
"#;

const SWR_USERS_TSX: &str = r#"import React from 'react';
import useSWR from 'swr';
import { fetcher } from './fetcher';

interface User {
  id: number;
  name: string;
}

export function Users() {
  const { data, error, isLoading } = useSWR<User[]>(
    'https://jsonplaceholder.typicode.com/users',
    fetcher
  );

  if (isLoading) return <p>Loading...</p>;
  if (error) return <p>Failed to load users.</p>;

  return (
    <ul>
      {data?.map((user) => (
        <li key={user.id}>{user.name}</li>
      ))}
    </ul>
  );
}

export default Users;
"#;

const SWR_FETCHER_TS: &str = r#"export async function fetcher<T>(url: string): Promise<T> {
  const response = await fetch(url);
  if (!response.ok) {
    throw new Error(`Request failed: ${response.status}`);
  }
  return response.json();
}
"#;

// ── router wiring ────────────────────────────────────────────────────────────

// Replaces the base App.tsx so the generated app actually renders the
// route table instead of the static welcome header.
const ROUTER_APP_TSX: &str = r#"import React from 'react';
import AppRoutes from './routes';
import './App.css';

function App() {
  return (
    <div className="App">
      <AppRoutes />
    </div>
  );
}

export default App;
"#;

const ROUTER_ROUTES_TSX: &str = r#"import React from 'react';
import { BrowserRouter, Routes, Route } from 'react-router-dom';
import NavBar from './components/NavBar';
import Home from './pages/Home';
import About from './pages/About';

export function AppRoutes() {
  return (
    <BrowserRouter>
      <NavBar />
      <Routes>
        <Route path="/" element={<Home />} />
        <Route path="/about" element={<About />} />
      </Routes>
    </BrowserRouter>
  );
}

export default AppRoutes;
"#;

const ROUTER_NAVBAR_TSX: &str = r#"import React from 'react';
import { Link } from 'react-router-dom';

export function NavBar() {
  return (
    <nav>
      <Link to="/">Home</Link> | <Link to="/about">About</Link>
    </nav>
  );
}

export default NavBar;
"#;

const ROUTER_HOME_TSX: &str = r#"import React from 'react';

export function Home() {
  return <h2>Welcome to {{PROJECT_NAME}}</h2>;
}

export default Home;
"#;

const ROUTER_ABOUT_TSX: &str = r#"import React from 'react';

export function About() {
  return <h2>About {{PROJECT_NAME}}</h2>;
}

export default About;
"#;

// ── state management stores ──────────────────────────────────────────────────

const REDUX_STORE_TS: &str = r#"import { configureStore } from '@reduxjs/toolkit';
import counterReducer from './counterSlice';

export const store = configureStore({
  reducer: {
    counter: counterReducer,
  },
});

export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
"#;

const REDUX_SLICE_TS: &str = r#"import { createSlice, PayloadAction } from '@reduxjs/toolkit';

interface CounterState {
  value: number;
}

const initialState: CounterState = {
  value: 0,
};

export const counterSlice = createSlice({
  name: 'counter',
  initialState,
  reducers: {
    increment: (state) => {
      state.value += 1;
    },
    decrement: (state) => {
      state.value -= 1;
    },
    incrementByAmount: (state, action: PayloadAction<number>) => {
      state.value += action.payload;
    },
  },
});

export const { increment, decrement, incrementByAmount } = counterSlice.actions;
export default counterSlice.reducer;
"#;

const REDUX_HOOKS_TS: &str = r#"import { TypedUseSelectorHook, useDispatch, useSelector } from 'react-redux';
import type { AppDispatch, RootState } from './index';

export const useAppDispatch: () => AppDispatch = useDispatch;
export const useAppSelector: TypedUseSelectorHook<RootState> = useSelector;
"#;

const JOTAI_ATOMS_TS: &str = r#"import { atom } from 'jotai';

export const counterAtom = atom(0);

export const doubledAtom = atom((get) => get(counterAtom) * 2);
"#;

const JOTAI_INDEX_TS: &str = r#"export * from './atoms';
"#;

// ── storybook ────────────────────────────────────────────────────────────────

const STORYBOOK_MAIN_TS: &str = r#"import type { StorybookConfig } from '@storybook/react-webpack5';

const config: StorybookConfig = {
  stories: ['../src/**/*.mdx', '../src/**/*.stories.@(js|jsx|mjs|ts|tsx)'],
  addons: [
    '@storybook/addon-links',
    '@storybook/addon-essentials',
    '@storybook/addon-onboarding',
    '@storybook/addon-interactions',
    '@storybook/preset-create-react-app',
  ],
  framework: {
    name: '@storybook/react-webpack5',
    options: {},
  },
  staticDirs: ['../public'],
};

export default config;
"#;

const STORYBOOK_PREVIEW_TS: &str = r#"import type { Preview } from '@storybook/react';

const preview: Preview = {
  parameters: {
    controls: {
      matchers: {
        color: /(background|color)$/i,
        date: /Date$/i,
      },
    },
  },
};

export default preview;
"#;

const STORY_BUTTON_TSX: &str = r#"import React from 'react';
import './button.css';

export interface ButtonProps {
  primary?: boolean;
  label: string;
  onClick?: () => void;
}

export const Button = ({ primary = false, label, ...props }: ButtonProps) => {
  const mode = primary ? 'storybook-button--primary' : 'storybook-button--secondary';
  return (
    <button
      type="button"
      className={['storybook-button', mode].join(' ')}
      {...props}
    >
      {label}
    </button>
  );
};
"#;

const STORY_BUTTON_STORIES_TSX: &str = r#"import type { Meta, StoryObj } from '@storybook/react';
import { Button } from './Button';

const meta: Meta<typeof Button> = {
  title: 'Example/Button',
  component: Button,
  tags: ['autodocs'],
};

export default meta;
type Story = StoryObj<typeof Button>;

export const Primary: Story = {
  args: {
    primary: true,
    label: 'Button',
  },
};

export const Secondary: Story = {
  args: {
    label: 'Button',
  },
};
"#;

const STORY_BUTTON_CSS: &str = r#".storybook-button {
  font-family: 'Nunito Sans', 'Helvetica Neue', Helvetica, Arial, sans-serif;
  font-weight: 700;
  border: 0;
  border-radius: 3em;
  cursor: pointer;
  display: inline-block;
  line-height: 1;
  padding: 11px 20px;
}

.storybook-button--primary {
  color: white;
  background-color: #1ea7fd;
}

.storybook-button--secondary {
  color: #333;
  background-color: transparent;
  box-shadow: rgba(0, 0, 0, 0.15) 0px 0px 0px 1px inset;
}
"#;

// ── store ────────────────────────────────────────────────────────────────────

/// Serves the template trees compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinStore {
    fn get(&self, id: TemplateTreeId) -> RkitResult<TemplateTree> {
        use TemplateSource::Static;

        let tree = match id {
            TemplateTreeId::Base => TemplateTree::new(id)
                .with_file("public/index.html", Static(BASE_INDEX_HTML))
                .with_file("src/index.tsx", Static(BASE_INDEX_TSX))
                .with_file("src/App.tsx", Static(BASE_APP_TSX))
                .with_file("src/App.css", Static(BASE_APP_CSS))
                .with_file("src/index.css", Static(BASE_INDEX_CSS))
                .with_file("tsconfig.json", Static(BASE_TSCONFIG))
                .with_file(".gitignore", Static(BASE_GITIGNORE))
                .with_file("README.md", Static(BASE_README)),

            TemplateTreeId::MuiComponents => TemplateTree::new(id)
                .with_file("components/AppButton.tsx", Static(MUI_BUTTON_TSX))
                .with_file("theme.ts", Static(MUI_THEME_TS)),

            TemplateTreeId::AntdComponents => TemplateTree::new(id)
                .with_file("components/AppButton.tsx", Static(ANTD_BUTTON_TSX))
                .with_file("components/AppLayout.tsx", Static(ANTD_LAYOUT_TSX)),

            TemplateTreeId::CssComponents => TemplateTree::new(id)
                .with_file("components/AppButton.tsx", Static(CSS_BUTTON_TSX))
                .with_file("components/AppButton.css", Static(CSS_BUTTON_CSS)),

            TemplateTreeId::ReactQueryExamples => TemplateTree::new(id)
                .with_file("Users.tsx", Static(REACT_QUERY_USERS_TSX))
                .with_file("queryClient.ts", Static(REACT_QUERY_CLIENT_TS)),

            TemplateTreeId::SwrExamples => TemplateTree::new(id)
                .with_file("Users.tsx", Static(SWR_USERS_TSX))
                .with_file("fetcher.ts", Static(SWR_FETCHER_TS)),

            TemplateTreeId::RouterWiring => TemplateTree::new(id)
                .with_file("App.tsx", Static(ROUTER_APP_TSX))
                .with_file("routes.tsx", Static(ROUTER_ROUTES_TSX))
                .with_file("components/NavBar.tsx", Static(ROUTER_NAVBAR_TSX))
                .with_file("pages/Home.tsx", Static(ROUTER_HOME_TSX))
                .with_file("pages/About.tsx", Static(ROUTER_ABOUT_TSX)),

            TemplateTreeId::ReduxStore => TemplateTree::new(id)
                .with_file("index.ts", Static(REDUX_STORE_TS))
                .with_file("counterSlice.ts", Static(REDUX_SLICE_TS))
                .with_file("hooks.ts", Static(REDUX_HOOKS_TS)),

            TemplateTreeId::JotaiStore => TemplateTree::new(id)
                .with_file("atoms.ts", Static(JOTAI_ATOMS_TS))
                .with_file("index.ts", Static(JOTAI_INDEX_TS)),

            TemplateTreeId::StorybookConfig => TemplateTree::new(id)
                .with_file("main.ts", Static(STORYBOOK_MAIN_TS))
                .with_file("preview.ts", Static(STORYBOOK_PREVIEW_TS)),

            TemplateTreeId::StorybookStories => TemplateTree::new(id)
                .with_file("Button.tsx", Static(STORY_BUTTON_TSX))
                .with_file("Button.stories.tsx", Static(STORY_BUTTON_STORIES_TSX))
                .with_file("button.css", Static(STORY_BUTTON_CSS)),
        };

        Ok(tree)
    }
}
