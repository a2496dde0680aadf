//! The `pathwise init` command.

use std::path::Path;

use anyhow::Result;

fn write_if_absent(path: &str, content: &str) -> Result<()> {
    if Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, content)?;
        println!("Created {path}");
    }
    Ok(())
}

pub fn execute() -> Result<()> {
    write_if_absent("pathwise.toml", SAMPLE_CONFIG)?;
    write_if_absent("catalog.toml", SAMPLE_CATALOG)?;
    write_if_absent("path.json", SAMPLE_PATH)?;

    println!("\nNext steps:");
    println!("  1. Run: pathwise validate --catalog catalog.toml --path path.json");
    println!("  2. Run: pathwise summary --path path.json");
    println!("  3. Run: pathwise record --path path.json --item p1 --score 45");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pathwise configuration

catalog = "catalog.toml"

[engine]
remedial_below = 60
fast_track_above = 90
remedial_difficulty = "beginner"
skip_difficulty = "intermediate"

[attempts]
pass_mark = 70
unlock_next = true

[reorder]
hands_on_sandbox = false
"#;

const SAMPLE_CATALOG: &str = r#"[catalog]
id = "example"
name = "Example Catalog"

[[assets]]
id = "html-dom"
title = "Introduction to HTML & DOM"
kind = "video"
difficulty = "beginner"
topic = "React"
tags = ["react", "frontend"]
duration_minutes = 8

[[assets]]
id = "react-basics"
title = "React for Beginners"
kind = "video"
difficulty = "intermediate"
topic = "React"
tags = ["react", "frontend", "ui"]
duration_minutes = 15

[[assets]]
id = "react-patterns"
title = "Advanced React Patterns"
kind = "sandbox"
difficulty = "advanced"
topic = "React"
tags = ["react", "patterns"]
duration_minutes = 30

[[assets]]
id = "web-architecture"
title = "Full Stack Web Architecture"
kind = "doc"
difficulty = "intermediate"
topic = "Web Development"
tags = ["web", "architecture"]
duration_minutes = 75
"#;

const SAMPLE_PATH: &str = r#"{
  "learner_id": "learner-1",
  "preference": "visual",
  "items": [
    {
      "id": "p1",
      "learner_id": "learner-1",
      "asset_id": "react-basics",
      "status": "in-progress"
    },
    {
      "id": "p2",
      "learner_id": "learner-1",
      "asset_id": "web-architecture",
      "status": "pending"
    },
    {
      "id": "p3",
      "learner_id": "learner-1",
      "asset_id": "react-patterns",
      "status": "locked"
    }
  ]
}
"#;
