//! Static content tables: code snippets, READMEs, licenses, ignore files,
//! folder and extension pools, and placeholder image assets.
//!
//! Templates use `{key}` placeholders resolved by [`crate::render`]. Literal
//! braces in code are left alone because they never form a `{identifier}`
//! token.

use crate::category::Category;

pub fn code_templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Web => WEB_CODE,
        Category::Devops => DEVOPS_CODE,
        Category::Monitoring => MONITORING_CODE,
        Category::Database => DATABASE_CODE,
        Category::Backend => BACKEND_CODE,
        Category::Ml => ML_CODE,
        Category::Language => LANGUAGE_CODE,
    }
}

const WEB_CODE: &[&str] = &[
    "// {filename}.js\nconst API_KEY = \"{random_str}\";\nexport default API_KEY;\n",
    "// utils/helpers.js\n/**\n * Helper functions\n */\nexport function formatDate(date) {\n    return date.toISOString().split('T')[0];\n}\n",
    "{\n    \"version\": \"{version}\",\n    \"apiEndpoint\": \"https://api.example.com/v1\",\n    \"timeout\": {timeout}\n}\n",
    "<!DOCTYPE html>\n<html>\n<head>\n    <title>{title}</title>\n</head>\n<body>\n    <div id=\"app\"></div>\n</body>\n</html>\n",
    "/* {filename}.css */\nbody {\n    font-family: Arial, sans-serif;\n    margin: 0;\n    padding: 0;\n}\n",
    "SECRET_KEY={random_str}\nAPI_KEY={random_str}\n",
    "{\n    \"name\": \"{project}\",\n    \"version\": \"{version}\",\n    \"scripts\": {\n        \"start\": \"node index.js\"\n    }\n}\n",
    "module.exports = {\n    entry: './src/index.js',\n    output: {\n        filename: 'bundle.js',\n        path: __dirname + '/dist'\n    }\n};\n",
    "import React from 'react';\n\nfunction App() {\n    return <div>Hello World</div>;\n}\n\nexport default App;\n",
    "import React from 'react';\nimport ReactDOM from 'react-dom';\nimport App from './App';\n\nReactDOM.render(<App />, document.getElementById('root'));\n",
];

const DEVOPS_CODE: &[&str] = &[
    "resource \"aws_instance\" \"web\" {\n    ami           = \"ami-{random_hex}\"\n    instance_type = \"t2.micro\"\n}\n",
    "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: app-deployment\nspec:\n  replicas: {replicas}\n  template:\n    spec:\n      containers:\n      - name: app\n        image: \"{image}:{version}\"\n",
    "FROM alpine:latest\nRUN apk add --no-cache python3\nCOPY . /app\nWORKDIR /app\nCMD [\"python3\", \"app.py\"]\n",
    "---\n- hosts: webservers\n  tasks:\n    - name: install nginx\n      apt:\n        name: nginx\n        state: present\n",
    "version: '3'\nservices:\n  web:\n    build: .\n    ports:\n      - \"5000:5000\"\n",
    "name: CI\non: [push]\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n      - run: make test\n",
    "pipeline {\n    agent any\n    stages {\n        stage('Build') {\n            steps {\n                echo 'Building...'\n            }\n        }\n    }\n}\n",
    "variable \"region\" {\n    default = \"us-east-1\"\n}\n",
];

const MONITORING_CODE: &[&str] = &[
    "global:\n  scrape_interval: 15s\nscrape_configs:\n  - job_name: 'node'\n    static_configs:\n      - targets: ['localhost:9100']\n",
    "{\n    \"title\": \"{title}\",\n    \"panels\": []\n}\n",
    "auth_enabled: false\nserver:\n  http_listen_port: 3100\n",
    "route:\n  receiver: 'default'\nreceivers:\n- name: 'default'\n  webhook_configs:\n  - url: 'http://example.com/webhook'\n",
    "[[inputs.cpu]]\n  percpu = true\n  totalcpu = true\n",
];

const DATABASE_CODE: &[&str] = &[
    "-- migrations/001_init.sql\nCREATE TABLE users (\n    id INT PRIMARY KEY,\n    name VARCHAR(255) NOT NULL\n);\n",
    "generator client {\n    provider = \"prisma-client-js\"\n}\n\ndatasource db {\n    provider = \"postgresql\"\n    url      = env(\"DATABASE_URL\")\n}\n",
    "[\n    {\"id\": 1, \"name\": \"{random_name}\"},\n    {\"id\": 2, \"name\": \"{random_name}\"}\n]\n",
    "module.exports = {\n    host: 'localhost',\n    port: 5432,\n    username: '{random_str}',\n    password: '{random_str}'\n};\n",
    "-- migrations/002_add_email.sql\nALTER TABLE users ADD COLUMN email VARCHAR(255);\n",
    "from sqlalchemy import Column, Integer, String\nfrom sqlalchemy.ext.declarative import declarative_base\n\nBase = declarative_base()\n\n\nclass User(Base):\n    __tablename__ = 'users'\n    id = Column(Integer, primary_key=True)\n    name = Column(String)\n",
    "package repositories\n\ntype UserRepository struct {\n    db *sql.DB\n}\n\nfunc (r *UserRepository) GetUser(id int) (*User, error) {\n    return nil, nil\n}\n",
];

const BACKEND_CODE: &[&str] = &[
    "from fastapi import FastAPI\n\napp = FastAPI()\n\n\n@app.get(\"/\")\ndef read_root():\n    return {\"message\": \"Hello World\"}\n",
    "package com.example;\n\nimport org.springframework.boot.SpringApplication;\nimport org.springframework.boot.autoconfigure.SpringBootApplication;\n\n@SpringBootApplication\npublic class Application {\n    public static void main(String[] args) {\n        SpringApplication.run(Application.class, args);\n    }\n}\n",
    "Rails.application.routes.draw do\n  resources :users\nend\n",
    "using Microsoft.AspNetCore.Mvc;\n\n[ApiController]\n[Route(\"[controller]\")]\npublic class UserController : ControllerBase\n{\n    [HttpGet]\n    public IActionResult Get() => Ok(new { name = \"John\" });\n}\n",
    "class UsersController < ApplicationController\n  def index\n    @users = User.all\n  end\nend\n",
    "const express = require('express');\nconst router = express.Router();\n\nrouter.get('/', (req, res) => res.json({ message: 'OK' }));\n\nmodule.exports = router;\n",
    "class UserService:\n    def get_user(self, user_id):\n        return {\"id\": user_id, \"name\": \"Test\"}\n",
];

const ML_CODE: &[&str] = &[
    "import torch\nimport torch.nn as nn\n\n\nclass SimpleModel(nn.Module):\n    def __init__(self):\n        super().__init__()\n        self.fc = nn.Linear(10, 2)\n\n    def forward(self, x):\n        return self.fc(x)\n",
    "{\n \"cells\": [\n  {\n   \"cell_type\": \"code\",\n   \"execution_count\": null,\n   \"metadata\": {},\n   \"outputs\": [],\n   \"source\": [\n    \"import pandas as pd\\n\",\n    \"data = pd.read_csv('data.csv')\\n\"\n   ]\n  }\n ]\n}\n",
    "# Dummy weights file\n",
    "import numpy as np\nfrom sklearn.ensemble import RandomForestClassifier\n\nX = np.random.rand(100, 10)\ny = np.random.randint(0, 2, 100)\nmodel = RandomForestClassifier()\nmodel.fit(X, y)\n",
    "learning_rate: 0.001\nbatch_size: 32\nepochs: 100\n",
    "import torch\nfrom torch.utils.data import Dataset\n\n\nclass MyDataset(Dataset):\n    def __len__(self):\n        return 1000\n\n    def __getitem__(self, idx):\n        return torch.randn(10), torch.tensor(0)\n",
];

const LANGUAGE_CODE: &[&str] = &[
    "fn main() {\n    println!(\"Hello, world!\");\n}\n",
    "console.log('Hello, world!');\n",
    "defmodule Example do\n  def hello do\n    IO.puts(\"Hello, world!\")\n  end\nend\n",
    "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello, world!\")\n}\n",
    "fun main() {\n    println(\"Hello, world!\")\n}\n",
    "print(\"Hello, world!\")\n",
    "puts \"Hello, world!\"\n",
    "<?php\necho \"Hello, world!\";\n",
    "public class Hello {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, world!\");\n    }\n}\n",
    "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, world!\" << std::endl;\n    return 0;\n}\n",
];

// ── README ──

pub fn readme_template(category: Category) -> &'static str {
    match category {
        Category::Web => {
            "# {repo_name}\n\nA modern web application built with {tech}. Features include:\n- Responsive design\n- API integration\n- User authentication\n- Real-time updates\n\n## Getting Started\n\n```bash\nnpm install\nnpm start\n```\n\n## Deployment\n\n```bash\nnpm run build\n```\n"
        }
        Category::Devops => {
            "# {repo_name}\n\nInfrastructure as code and automation tools for {tech}. This repository contains:\n- Terraform configurations\n- Kubernetes manifests\n- CI/CD pipelines\n- Monitoring setup\n\n## Usage\n\n```bash\nterraform init\nterraform apply\n```\n\n## Structure\n\n- `terraform/` - Terraform modules\n- `kubernetes/` - K8s manifests\n- `scripts/` - Automation scripts\n"
        }
        Category::Monitoring => {
            "# {repo_name}\n\nMonitoring stack for {tech}. Includes:\n- Prometheus metrics\n- Grafana dashboards\n- Alerting rules\n- Log aggregation with Loki\n\n## Quick Start\n\n```bash\ndocker-compose up -d\n```\n\nAccess Grafana at http://localhost:3000\n"
        }
        Category::Database => {
            "# {repo_name}\n\nDatabase schema and migrations for {tech}. Contains:\n- SQL scripts\n- ORM models\n- Seed data\n- Query examples\n\n## Setup\n\n```sql\npsql -f migrations/001_init.sql\n```\n\n## Migrations\n\nRun migrations with:\n```bash\nnpm run migrate\n```\n"
        }
        Category::Backend => {
            "# {repo_name}\n\nBackend service for {tech}. Implements REST API with:\n- JWT authentication\n- Database integration\n- Request validation\n- Unit tests\n\n## Run\n\n```bash\npython app/main.py\n```\n\n## API Endpoints\n\n- `GET /` - Health check\n- `POST /users` - Create user\n"
        }
        Category::Ml => {
            "# {repo_name}\n\nMachine learning project using {tech}. Includes:\n- Model training scripts\n- Jupyter notebooks\n- Pre-trained weights\n- Evaluation metrics\n\n## Training\n\n```bash\npython models/model.py\n```\n\n## Notebooks\n\nExplore the notebooks in `notebooks/` directory.\n"
        }
        Category::Language => {
            "# {repo_name}\n\nA {tech} library/example. Demonstrates:\n- Core language features\n- Best practices\n- Unit tests\n- Performance benchmarks\n\n## Build\n\n```bash\nmake build\n```\n\n## Tests\n\n```bash\nmake test\n```\n"
        }
    }
}

// ── Licenses ──

/// `(SPDX identifier, text)` pairs. Texts carry `{year}` and `{repo_name}`.
pub const LICENSES: &[(&str, &str)] = &[
    ("MIT", MIT_LICENSE),
    ("Apache-2.0", APACHE_LICENSE),
    ("GPL-3.0", GPL_LICENSE),
];

const MIT_LICENSE: &str = "MIT License

Copyright (c) {year} {repo_name} Contributors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const APACHE_LICENSE: &str = "Copyright {year} {repo_name} Contributors

Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
";

const GPL_LICENSE: &str = "{repo_name}
Copyright (C) {year} {repo_name} Contributors

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

// ── .gitignore ──

/// Language keywords with a dedicated ignore file, checked in order.
/// "javascript" must not select the java template, so the web keywords are
/// screened out first by [`gitignore_template`].
const GITIGNORE_BY_LANGUAGE: &[(&str, &str)] = &[
    ("python", PYTHON_GITIGNORE),
    ("rust", RUST_GITIGNORE),
    ("golang", GO_GITIGNORE),
    ("ruby", RUBY_GITIGNORE),
    ("php", PHP_GITIGNORE),
    ("java", JAVA_GITIGNORE),
];

/// Pick an ignore file: a language template when the repository name names
/// one, otherwise the category default.
pub fn gitignore_template(category: Category, repo_name: &str) -> &'static str {
    let lower = repo_name.to_lowercase();
    if !lower.contains("javascript")
        && let Some((_, text)) = GITIGNORE_BY_LANGUAGE
            .iter()
            .find(|(kw, _)| lower.contains(kw))
    {
        return text;
    }
    match category {
        Category::Ml | Category::Backend => PYTHON_GITIGNORE,
        _ => NODE_GITIGNORE,
    }
}

const NODE_GITIGNORE: &str = "# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.pnpm-debug.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage
coverage
*.lcov
.nyc_output

# Dependency directories
node_modules/
jspm_packages/

# TypeScript cache
*.tsbuildinfo

# Optional caches
.npm
.eslintcache
.stylelintcache

# Output of 'npm pack'
*.tgz

# dotenv environment variable files
.env
.env.development.local
.env.test.local
.env.production.local
.env.local

# Build output
.cache
.parcel-cache
.next
out
.nuxt
dist

# Serverless directories
.serverless/
";

const PYTHON_GITIGNORE: &str = "# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
build/
dist/
eggs/
.eggs/
*.egg-info/
*.egg
wheels/

# Unit test / coverage reports
htmlcov/
.tox/
.nox/
.coverage
.coverage.*
.pytest_cache/

# Jupyter Notebook
.ipynb_checkpoints

# Environments
.env
.venv
env/
venv/

# mypy
.mypy_cache/
";

const JAVA_GITIGNORE: &str = ".classpath
.project
.settings/
target/
*.class
*.jar
*.war
*.ear
*.log
*.iml
.idea/
*.iws
*.ipr
";

const GO_GITIGNORE: &str = "# Binaries
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with `go test -c`
*.test

# Output of the go coverage tool
*.out

# Dependency directories
vendor/

# Go workspace file
go.work
go.work.sum
";

const RUST_GITIGNORE: &str = "# Generated by Cargo
/target/
**/*.rs.bk
Cargo.lock
";

const RUBY_GITIGNORE: &str = "*.gem
*.rbc
/.config
/coverage/
/pkg/
/spec/reports/
/test/tmp/
/tmp/

# Used by dotenv library to load environment variables.
.env

## Documentation cache and generated files:
/.yardoc/
/_yardoc/
/doc/
/rdoc/

## Environment normalization:
/.bundle/
/vendor/bundle
/lib/bundler/man/
";

const PHP_GITIGNORE: &str = "/vendor/
composer.lock
composer.phar
.phpunit.result.cache
.phpunit.cache
.php_cs.cache
phpunit.xml
.phpstorm.meta.php
_ide_helper.php
";

// ── Fixed essentials ──

pub const EDITORCONFIG: &str = "root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
insert_final_newline = true

[*.{py,rb}]
indent_size = 4

[*.{java,cpp,c}]
indent_size = 4

[*.md]
trim_trailing_whitespace = false
";

pub const CONTRIBUTING: &str =
    "# Contributing to {repo_name}\n\nPlease read the guidelines before contributing.\n";

pub const CHANGELOG: &str = "# Changelog\n\n## [{version}] - {date}\n### Added\n- Initial release\n";

// ── Folder and extension pools ──

pub fn folders(category: Category) -> &'static [&'static str] {
    match category {
        Category::Web => &[
            "src", "utils", "config", "public", "tests", "scripts", "components", "pages",
            "styles", "assets", "hooks", "store",
        ],
        Category::Devops => &[
            "terraform", "kubernetes", "docker", "scripts", "ansible", "monitoring", "ci", "helm",
            "packer", "vagrant",
        ],
        Category::Monitoring => &[
            "prometheus", "grafana", "loki", "alertmanager", "config", "dashboards", "rules",
            "provisioning",
        ],
        Category::Database => &[
            "migrations", "seeds", "config", "prisma", "models", "queries", "schema", "backups",
        ],
        Category::Backend => &[
            "app", "config", "routes", "controllers", "models", "tests", "middleware", "services",
            "api", "core",
        ],
        Category::Ml => &[
            "models", "data", "notebooks", "utils", "weights", "configs", "scripts",
            "experiments", "evaluation",
        ],
        Category::Language => &[
            "src", "lib", "examples", "tests", "bin", "docs", "benchmarks", "include",
        ],
    }
}

pub fn extensions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Web => &[
            "js", "ts", "json", "html", "css", "scss", "env", "md", "jsx", "tsx", "vue",
        ],
        Category::Devops => &[
            "tf", "yaml", "sh", "Dockerfile", "yml", "conf", "toml", "cfg", "ini",
        ],
        Category::Monitoring => &["yml", "ini", "conf", "json", "rules", "alerts"],
        Category::Database => &["sql", "js", "json", "prisma", "graphql", "go", "py", "rb", "php"],
        Category::Backend => &["py", "java", "kt", "go", "rb", "php", "cs", "rs", "scala", "exs"],
        Category::Ml => &["py", "ipynb", "txt", "h5", "json", "yaml", "csv", "pkl", "joblib"],
        Category::Language => &[
            "rs", "go", "ex", "js", "rb", "php", "java", "c", "cpp", "swift", "kt", "scala", "lua",
            "hs", "erl", "exs", "clj", "groovy", "sh",
        ],
    }
}

// ── Placeholder assets ──

/// 1x1 transparent PNG.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0xfc,
    0xcf, 0xc0, 0x50, 0x0f, 0x00, 0x04, 0x85, 0x01, 0x80, 0x84, 0xa9, 0x8c, 0x21, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// 16x16 monochrome ICO: 6-byte header, one 16-byte directory entry, then a
/// 176-byte BMP payload (header, palette, XOR mask, AND mask).
pub const PLACEHOLDER_ICO: &[u8] = &placeholder_ico();

const ICO_LEN: usize = 6 + 16 + 40 + 8 + 64 + 64;
const ICO_AND_MASK_OFFSET: usize = ICO_LEN - 64;

const fn placeholder_ico() -> [u8; ICO_LEN] {
    let mut b = [0u8; ICO_LEN];
    // ICONDIR: reserved, type 1 (icon), one image.
    b[2] = 1;
    b[4] = 1;
    // ICONDIRENTRY: 16x16, 2 colours, 1 plane, 1 bpp, 176 bytes at offset 22.
    b[6] = 16;
    b[7] = 16;
    b[8] = 2;
    b[10] = 1;
    b[12] = 1;
    b[14] = 176;
    b[18] = 22;
    // BITMAPINFOHEADER: size 40, 16 wide, 32 high (XOR + AND), 1 plane, 1 bpp.
    b[22] = 40;
    b[26] = 16;
    b[30] = 32;
    b[34] = 1;
    b[36] = 1;
    // Palette entry 1 is white. XOR mask stays zero; a full AND mask makes
    // every pixel transparent.
    b[66] = 0xff;
    b[67] = 0xff;
    b[68] = 0xff;
    let mut i = ICO_AND_MASK_OFFSET;
    while i < ICO_LEN {
        b[i] = 0xff;
        i += 1;
    }
    b
}

pub const PLACEHOLDER_SVG: &str = r#"<svg width="100" height="100" xmlns="http://www.w3.org/2000/svg">
  <circle cx="50" cy="50" r="40" stroke="green" stroke-width="4" fill="yellow" />
</svg>
"#;
