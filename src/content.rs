//! Static text blocks referenced by command behaviors.
//!
//! The built-in table can be partially overridden from a JSON file; missing fields keep their
//! built-in value and unknown fields are rejected.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{HacktermError, Result};

/// Symbolic names for the multi-line content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Help,
    About,
    Projects,
    Contact,
    PublicInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Identity {
    pub user: String,
    pub host: String,
    pub session: String,
    pub access_level: String,
    pub email: String,
    pub mail_subject: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "bradhudson.dev".to_string(),
            session: "Terminal Portfolio v2.1".to_string(),
            access_level: "Visitor (Read-Only)".to_string(),
            email: "brad@bradhudson.dev".to_string(),
            mail_subject: "Hello from Terminal Portfolio".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentTable {
    pub identity: Identity,
    pub banner: Vec<String>,
    pub help: String,
    pub about: String,
    pub projects: String,
    pub contact: String,
    pub public_info: String,
    pub root_listing: Vec<String>,
    pub projects_listing: Vec<String>,
}

static BUILTIN: Lazy<ContentTable> = Lazy::new(|| ContentTable {
    identity: Identity::default(),
    banner: BANNER.iter().map(|line| line.to_string()).collect(),
    help: HELP_TEXT.to_string(),
    about: ABOUT_TEXT.to_string(),
    projects: PROJECTS_TEXT.to_string(),
    contact: CONTACT_TEXT.to_string(),
    public_info: PUBLIC_INFO_TEXT.to_string(),
    root_listing: ROOT_LISTING.iter().map(|line| line.to_string()).collect(),
    projects_listing: PROJECTS_LISTING.iter().map(|line| line.to_string()).collect(),
});

impl Default for ContentTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl ContentTable {
    pub fn builtin() -> &'static ContentTable {
        &BUILTIN
    }

    pub fn get(&self, key: ContentKey) -> &str {
        match key {
            ContentKey::Help => &self.help,
            ContentKey::About => &self.about,
            ContentKey::Projects => &self.projects,
            ContentKey::Contact => &self.contact,
            ContentKey::PublicInfo => &self.public_info,
        }
    }

    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Reads a JSON override file layered over the built-in table.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).map_err(|source| HacktermError::content_read(path, source))?;
        Self::from_json_str(&raw).map_err(|source| HacktermError::content_parse(path, source))
    }

    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

const BANNER: [&str; 15] = [
    "Initializing secure terminal connection...",
    "Loading quantum encryption protocols...",
    "Establishing encrypted tunnel to bradhudson.dev...",
    "Authentication successful. Welcome, guest user.",
    "",
    "╔═══════════════════════════════════════════════════════════════╗",
    "║                    BRAD HUDSON - PORTFOLIO v2.1              ║",
    "║                      Terminal Interface                       ║",
    "║                                                               ║",
    "║  WARNING: Unauthorized access is monitored and recorded      ║",
    "║  All activities are logged for security purposes             ║",
    "╚═══════════════════════════════════════════════════════════════╝",
    "",
    "Type 'help' for available commands or 'hack personal_data' if you dare...",
    "",
];

const ROOT_LISTING: [&str; 6] = [
    "about.txt           2.1KB    Personal information file",
    "projects/           DIR      Development projects directory",
    "contact.msg         1.8KB    Encrypted contact information",
    "data/               DIR      Protected data directory",
    "resume.pdf          245KB    Professional resume document",
    ".secrets/           DIR      [ACCESS DENIED]",
];

const PROJECTS_LISTING: [&str; 6] = [
    "../                 DIR      Parent directory",
    "portfolio_site/     DIR      This terminal portfolio",
    "webapp_dashboard/   DIR      React analytics dashboard",
    "mobile_app/         DIR      Flutter cross-platform app",
    "ai_chatbot/         DIR      Python NLP chatbot",
    "blockchain_tool/    DIR      Web3 development tool",
];

const HELP_TEXT: &str = "
╔══════════════════════════════════════════════════════════════════╗
║                        AVAILABLE COMMANDS                        ║
╚══════════════════════════════════════════════════════════════════╝

  help                    - Display this help menu
  ls                      - List files and directories
  cd <directory>          - Change directory (projects, ..)
  cat <file>              - Display file contents
  message                 - Open secure communication channel
  projects                - List Brad's development projects
  hack personal_data      - Attempt unauthorized data access (RISKY!)
  whoami                  - Display current user information
  pwd                     - Show current directory
  clear                   - Clear terminal screen

╔══════════════════════════════════════════════════════════════════╗
║ WARNING: Some commands may trigger security protocols            ║
║ Unauthorized access attempts are logged and monitored           ║
╚══════════════════════════════════════════════════════════════════╝
";

const ABOUT_TEXT: &str = "
╔══════════════════════════════════════════════════════════════════╗
║                           ABOUT BRAD HUDSON                      ║
╚══════════════════════════════════════════════════════════════════╝

Full Stack Developer & Technology Enthusiast

Brad Hudson is a passionate software engineer with 5+ years of experience\x20
building scalable web applications and innovative digital solutions.\x20

SPECIALIZATIONS:
• Frontend: React, Vue.js, TypeScript, Next.js
• Backend: Node.js, Python, Java, Express
• Databases: PostgreSQL, MongoDB, Redis
• Cloud: AWS, Docker, Kubernetes
• Mobile: React Native, Flutter

CURRENT FOCUS:
Exploring AI/ML integration in web applications and building
developer tools that enhance productivity and code quality.

WHEN NOT CODING:
Brad enjoys hiking, photography, and contributing to open-source
projects. Always learning and sharing knowledge with the dev community.

Contact: brad@bradhudson.dev | GitHub: @bradhudson
";

const CONTACT_TEXT: &str = "
╔══════════════════════════════════════════════════════════════════╗
║                   SECURE COMMUNICATION LINK                     ║
╚══════════════════════════════════════════════════════════════════╝

Encrypted communication channel is now active.

SECURE CONTACT OPTIONS:
→ Email: brad@bradhudson.dev
→ LinkedIn: linkedin.com/in/brad-hudson-dev
→ GitHub: github.com/bradhudson
→ Twitter: @brad_codes

Click to open secure email client:
";

const PROJECTS_TEXT: &str = "
╔══════════════════════════════════════════════════════════════════╗
║                      BRAD'S DEVELOPMENT PROJECTS                 ║
╚══════════════════════════════════════════════════════════════════╝

[1] TERMINAL PORTFOLIO SITE
    Type: Personal Website
    Tech: HTML, CSS, Vanilla JavaScript
    Desc: Retro hacking-style terminal interface (you're using it now!)
    Demo: ████ CURRENTLY ACTIVE ████

[2] ANALYTICS DASHBOARD
    Type: Web Application
    Tech: React, Node.js, PostgreSQL, Chart.js
    Desc: Real-time business intelligence dashboard with data visualization
    Status: Production Ready
\x20\x20\x20\x20
[3] TASK MANAGEMENT APP
    Type: Mobile + Web Application\x20\x20
    Tech: Flutter, Firebase, Redux
    Desc: Cross-platform productivity app with real-time collaboration
    Status: Beta Testing

[4] AI CHATBOT FRAMEWORK
    Type: Open Source Library
    Tech: Python, TensorFlow, FastAPI
    Desc: Configurable NLP chatbot with training pipeline
    Status: Active Development

[5] BLOCKCHAIN VOTING SYSTEM
    Type: Decentralized Application
    Tech: Solidity, Web3.js, React
    Desc: Transparent voting platform using Ethereum smart contracts
    Status: Proof of Concept

[6] CODE REVIEW AUTOMATION TOOL
    Type: Developer Tool
    Tech: TypeScript, GitHub API, OpenAI API
    Desc: AI-powered code review assistant with security analysis
    Status: MVP Complete

For detailed project information, visit: github.com/bradhudson
";

const PUBLIC_INFO_TEXT: &str = "
╔══════════════════════════════════════════════════════════════════╗
║                    PUBLIC INFORMATION ONLY                       ║
╚══════════════════════════════════════════════════════════════════╝

Nice try! But Brad's personal data is protected by quantum encryption\x20
and a very good sense of humor. Here's what I can share publicly:

INTERESTS:\x20
• Building cool terminal UIs (like this one!)
• Exploring new programming languages and frameworks
• Contributing to open source projects
• Mentoring junior developers

FUN FACTS:
• Coded his first website at age 12
• Can solve a Rubik's cube in under 2 minutes
• Prefers dark mode for everything (obviously)
• Thinks the best debugger is console.log()\x20

MOTTO: \"Code with purpose, debug with patience, deploy with confidence\"

If you want to know more, use the 'message' command like a normal person! 😉
";
