//! Build script - embeds build date and git commit hash
//!
//! Dev builds emit `VERGEN_GIT_SHA` and `CONPALETTE_BUILD_DATE`.
//! Builds with the `release` feature emit the build date only.

use std::process::Command;

/// Current date as YYYY-MM-DD, or "unknown".
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=CONPALETTE_BUILD_DATE={}", get_build_date());

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = match GitclBuilder::default().sha(true).build() {
            Ok(git) => git,
            Err(e) => {
                println!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        // Outside a git checkout there is no SHA to embed.
        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit())
        {
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
