//! Builtin Signal Group Definitions
//!
//! コード内で定義されるビルトインのシグナルグループ。
//! スコアリングループから独立してテスト・拡張できるよう、
//! キーワードテーブルはデータとして保持する。

/// 基本カテゴリ（6種、固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Frontend,
    Backend,
    Library,
    Monorepo,
    AiMl,
    Cli,
}

impl Category {
    /// 固定カテゴリ数
    pub const COUNT: usize = 6;

    /// スコア配列用のインデックス
    pub fn index(&self) -> usize {
        match self {
            Category::Frontend => 0,
            Category::Backend => 1,
            Category::Library => 2,
            Category::Monorepo => 3,
            Category::AiMl => 4,
            Category::Cli => 5,
        }
    }
}

/// シグナルグループの静的定義
///
/// グループ内のキーワードがひとつでもドキュメントに含まれれば、
/// そのカテゴリの生スコアに`weight`を加算する（ドキュメントごとに1回）。
/// `all_of`は複合マーカー。全語が揃った場合にもグループが成立する。
#[derive(Debug, Clone)]
pub struct SignalGroup {
    /// 加算先カテゴリ
    pub category: Category,
    /// 部分一致で検索するキーワード（小文字）
    pub keywords: &'static [&'static str],
    /// 全語が含まれる場合にのみ成立する複合マーカー（空なら無効）
    pub all_of: &'static [&'static str],
    /// 加算ウェイト（1-3、フレームワーク名 > 一般名詞）
    pub weight: u32,
    /// 初回マッチ時に記録する特徴ラベル（低ウェイトグループはラベルなし）
    pub label: Option<&'static str>,
}

impl SignalGroup {
    /// このグループがドキュメント内容に成立するか
    pub fn matches(&self, content: &str) -> bool {
        if self.keywords.iter().any(|keyword| content.contains(keyword)) {
            return true;
        }
        !self.all_of.is_empty() && self.all_of.iter().all(|marker| content.contains(marker))
    }
}

/// ビルトインのシグナルグループテーブル
pub const SIGNAL_GROUPS: &[SignalGroup] = &[
    SignalGroup {
        category: Category::Frontend,
        keywords: &[
            "react",
            "vue",
            "angular",
            "ui component",
            "jsx",
            "tsx",
            "styled-component",
        ],
        all_of: &[],
        weight: 3,
        label: Some("React/Vue/Angular Components"),
    },
    SignalGroup {
        category: Category::Frontend,
        keywords: &["state management", "redux", "vuex", "zustand"],
        all_of: &[],
        weight: 2,
        label: Some("Client-side State Management"),
    },
    SignalGroup {
        category: Category::Frontend,
        keywords: &["styling", "css", "tailwind", "sass"],
        all_of: &[],
        weight: 1,
        label: None,
    },
    SignalGroup {
        category: Category::Backend,
        keywords: &[
            "express",
            "fastapi",
            "django",
            "spring",
            "nestjs",
            "api endpoint",
            "route",
        ],
        all_of: &[],
        weight: 3,
        label: Some("Backend Framework"),
    },
    SignalGroup {
        category: Category::Backend,
        keywords: &["database", "sql", "mongodb", "postgres", "orm"],
        all_of: &[],
        weight: 2,
        label: Some("Database Layer"),
    },
    SignalGroup {
        category: Category::Backend,
        keywords: &["microservice", "rest api", "graphql"],
        all_of: &[],
        weight: 2,
        label: Some("Service Architecture"),
    },
    SignalGroup {
        category: Category::Library,
        keywords: &[
            "export",
            "module export",
            "public api",
            "npm package",
            "library",
        ],
        all_of: &[],
        weight: 2,
        label: Some("Public API/Module Exports"),
    },
    SignalGroup {
        category: Category::Library,
        keywords: &["no ui", "utility", "helper", "no frontend"],
        all_of: &[],
        weight: 2,
        label: Some("No UI Components"),
    },
    SignalGroup {
        category: Category::Monorepo,
        keywords: &["monorepo", "workspace", "multiple package", "package.json"],
        all_of: &["src", "packages"],
        weight: 3,
        label: Some("Monorepo Structure"),
    },
    SignalGroup {
        category: Category::Monorepo,
        keywords: &["shared", "common", "internal package"],
        all_of: &[],
        weight: 1,
        label: None,
    },
    SignalGroup {
        category: Category::AiMl,
        keywords: &["model", "training", "dataset", "tensor", "neural"],
        all_of: &[],
        weight: 3,
        label: Some("ML/AI Models"),
    },
    SignalGroup {
        category: Category::AiMl,
        keywords: &["pytorch", "tensorflow", "scikit", "pandas"],
        all_of: &[],
        weight: 2,
        label: Some("ML Frameworks"),
    },
    SignalGroup {
        category: Category::Cli,
        keywords: &["cli", "command line", "command", "arguments", "stdin", "stdout"],
        all_of: &[],
        weight: 2,
        label: Some("CLI Interface"),
    },
    SignalGroup {
        category: Category::Cli,
        keywords: &["yargs", "commander", "click"],
        all_of: &[],
        weight: 2,
        label: None,
    },
];
