//! The migration tables: every endpoint literal the front-end hardcodes, the
//! constant that replaces it, and the files to rewrite. All of it is
//! compiled in; this tool takes no configuration.

/// A fixed endpoint literal and the symbolic reference that replaces it.
#[derive(Debug, Clone, Copy)]
pub struct StaticRule {
    /// Bare endpoint URL, without surrounding quotes
    pub url: &'static str,
    /// Constant path emitted in its place
    pub reference: &'static str,
}

impl StaticRule {
    /// The three lexical forms the literal can take in source: double-quoted,
    /// single-quoted, backtick-quoted. The quotes are consumed by the
    /// replacement; the reference is emitted bare.
    pub fn quoted_forms(&self) -> [String; 3] {
        [
            format!("\"{}\"", self.url),
            format!("'{}'", self.url),
            format!("`{}`", self.url),
        ]
    }
}

/// A parameterized endpoint: a template-literal URL whose trailing segment is
/// a `${...}` interpolation. The capture is re-emitted as a call argument.
#[derive(Debug, Clone, Copy)]
pub struct DynamicRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// Symbol every replacement introduces into a file.
pub const CONSTANTS_SYMBOL: &str = "API_URLS";

/// Substring that marks the constants module as already imported.
pub const CONSTANTS_IMPORT_MARKER: &str = r#"from "../config/server""#;

/// Import line inserted after the last existing import. The relative path is
/// the same for every target; see DESIGN.md for the depth limitation.
pub const CONSTANTS_IMPORT: &str = r#"import { API_URLS } from "../config/server";"#;

pub const STATIC_RULES: &[StaticRule] = &[
    // User endpoints
    StaticRule {
        url: "http://localhost:3000/api/users/signup",
        reference: "API_URLS.USERS.SIGNUP",
    },
    StaticRule {
        url: "http://localhost:3000/api/users/login",
        reference: "API_URLS.USERS.LOGIN",
    },
    StaticRule {
        url: "http://localhost:3000/api/users/info",
        reference: "API_URLS.USERS.INFO",
    },
    StaticRule {
        url: "http://localhost:3000/api/users/all",
        reference: "API_URLS.USERS.ALL",
    },
    StaticRule {
        url: "http://localhost:3000/api/users/getUserByUid",
        reference: "API_URLS.USERS.GET_BY_UID",
    },
    StaticRule {
        url: "http://localhost:3000/api/users/changeUserStatus",
        reference: "API_URLS.USERS.CHANGE_STATUS",
    },
    StaticRule {
        url: "http://localhost:3000/api/users/registerContest",
        reference: "API_URLS.USERS.REGISTER_CONTEST",
    },
    // Contest endpoints
    StaticRule {
        url: "http://localhost:3000/api/contests/add",
        reference: "API_URLS.CONTESTS.ADD",
    },
    StaticRule {
        url: "http://localhost:3000/api/contests/getall",
        reference: "API_URLS.CONTESTS.GET_ALL",
    },
    StaticRule {
        url: "http://localhost:3000/api/contests/addProblemToContest",
        reference: "API_URLS.CONTESTS.ADD_PROBLEM",
    },
    StaticRule {
        url: "http://localhost:3000/api/contests/removeProblemFromContest",
        reference: "API_URLS.CONTESTS.REMOVE_PROBLEM",
    },
    StaticRule {
        url: "http://localhost:3000/api/contests/getUserMatchInfo",
        reference: "API_URLS.CONTESTS.GET_USER_MATCH_INFO",
    },
    StaticRule {
        url: "http://localhost:3000/api/contests/startContest",
        reference: "API_URLS.CONTESTS.START_CONTEST",
    },
    StaticRule {
        url: "http://localhost:3000/api/contests/updateMatchWinner",
        reference: "API_URLS.CONTESTS.UPDATE_MATCH_WINNER",
    },
    // Problem endpoints
    StaticRule {
        url: "http://localhost:3000/api/problems/add",
        reference: "API_URLS.PROBLEMS.ADD",
    },
    StaticRule {
        url: "http://localhost:3000/api/problems/getall",
        reference: "API_URLS.PROBLEMS.GET_ALL",
    },
    StaticRule {
        url: "http://localhost:3000/api/problems/get",
        reference: "API_URLS.PROBLEMS.GET",
    },
    StaticRule {
        url: "http://localhost:3000/api/problems/edit",
        reference: "API_URLS.PROBLEMS.EDIT",
    },
    StaticRule {
        url: "http://localhost:3000/api/problems/delete",
        reference: "API_URLS.PROBLEMS.DELETE",
    },
    // Compiler endpoints
    StaticRule {
        url: "http://localhost:3000/api/compiler/submitCode",
        reference: "API_URLS.COMPILER.SUBMIT_CODE",
    },
];

pub const DYNAMIC_RULES: &[DynamicRule] = &[
    DynamicRule {
        pattern: r"`http://localhost:3000/api/contests/getcon/\$\{([^}]+)\}`",
        replacement: "API_URLS.CONTESTS.GET_BY_ID($1)",
    },
    DynamicRule {
        pattern: r"`http://localhost:3000/api/contests/edit/\$\{([^}]+)\}`",
        replacement: "API_URLS.CONTESTS.EDIT($1)",
    },
    DynamicRule {
        pattern: r"`http://localhost:3000/api/contests/delete/\$\{([^}]+)\}`",
        replacement: "API_URLS.CONTESTS.DELETE($1)",
    },
    DynamicRule {
        pattern: r"`http://localhost:3000/api/contests/getContestProblems/\$\{([^}]+)\}`",
        replacement: "API_URLS.CONTESTS.GET_CONTEST_PROBLEMS($1)",
    },
    DynamicRule {
        pattern: r"`http://localhost:3000/api/users/checkContestRegistration/\$\{([^}]+)\}`",
        replacement: "API_URLS.USERS.CHECK_CONTEST_REGISTRATION($1)",
    },
];

/// The files to rewrite, relative to the front-end project root.
pub const MIGRATION_TARGETS: &[&str] = &[
    "src/pages/ContestStartPage.tsx",
    "src/components/ViewQuestionComponent.tsx",
    "src/components/Navbar.jsx",
    "src/components/CreateContest.jsx",
    "src/components/ContestList.jsx",
    "src/components/CreateProblem.jsx",
    "src/components/ContestCard.jsx",
    "src/components/Signup.jsx",
];
