//! Reusable data file fixtures for CLI tests.

/// A small but complete vocabulary.
pub const VOCABULARY_YAML: &str = r#"
domains:
  - name: Security
    title: "🔒 Security"
  - name: DevOps-SRE
    title: "🔧 DevOps & SRE"
types: [Tool, Article, Repo]
maturity:
  - name: Battle-tested
    emoji: "🟢"
  - name: Emerging
    emoji: "🟡"
  - name: Experimental
    emoji: "🔴"
effort: [Low, Medium, High]
tags:
  - vulnerability-scanning
  - containers
  - supply-chain
  - load-testing
  - performance
  - ci-cd
good_for: [production, learning, POCs]
"#;

/// Two entries that validate with zero violations.
pub const VALID_RESOURCES_YAML: &str = r#"
resources:
  - id: trivy
    title: Trivy
    url: https://github.com/aquasecurity/trivy
    domains: [Security]
    type: Tool
    maturity: Battle-tested
    effort: Low
    tags: [vulnerability-scanning, containers, supply-chain]
    summary: >-
      Scans container images, file systems, and IaC definitions for known
      vulnerabilities and misconfigurations with a single static binary.
    why_useful: >-
      Catches CVEs and misconfigured manifests in CI before they reach a
      cluster.
    good_for: [production]
    github_stars: 29000
    added: 2024-01-15
    last_updated: 2024-06

  - id: k6
    title: k6
    url: https://github.com/grafana/k6
    domains: [DevOps-SRE]
    type: Tool
    maturity: Battle-tested
    effort: Medium
    tags: [load-testing, performance, ci-cd]
    summary: >-
      Load testing tool where scenarios are plain JavaScript and checks and
      thresholds gate CI runs against performance budgets.
    why_useful: >-
      Load tests live next to the code and run in the same pipeline as the
      unit tests.
    good_for: [production, POCs]
    github_stars: 25000
    related: [trivy]
    added: 2023-11-20
"#;

/// A catalog with a fatal violation (missing summary and bad domain).
pub const INVALID_RESOURCES_YAML: &str = r#"
resources:
  - id: broken
    title: Broken
    url: https://example.com/broken
    domains: [Networking]
    type: Tool
    maturity: Battle-tested
    tags: [containers, supply-chain, ci-cd]
    good_for: [production]
"#;

/// Valid schema but with advisory problems (short summary, 2 tags).
pub const WARNING_RESOURCES_YAML: &str = r#"
resources:
  - id: meh
    title: Meh
    url: https://example.com/meh
    domains: [Security]
    type: Tool
    maturity: Emerging
    tags: [containers, ci-cd]
    summary: Too short.
    good_for: [learning]
"#;
