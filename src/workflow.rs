//! CI workflow helper — emits the shell gate script for submission PRs.
//!
//! The generated script is the one strict component of the tool: it runs in
//! a CI gate, so the first missing or failing file exits non-zero, unlike
//! the batch driver which always runs to completion.

use anyhow::Context;
use std::path::Path;

/// Contents of the generated gate script. Enumerates files added under
/// `submissions/` in the last commit and runs the pipeline's per-file
/// validation step on each.
pub const WORKFLOW_SCRIPT: &str = r#"#!/bin/bash

# Safe way to handle file lists in the validate-pr workflow.
# Replaces the problematic inline sections of .github/workflows/validate-pr.yml.

mapfile -t changed_files < <(git diff --name-only --diff-filter=A HEAD~1 HEAD | grep "^submissions/")

if [ ${#changed_files[@]} -eq 0 ]; then
    echo "No submission files found in this PR"
    exit 1
fi

echo "Found ${#changed_files[@]} submission files:"
for file in "${changed_files[@]}"; do
    echo "  - $file"
done

for file in "${changed_files[@]}"; do
    if [ -f "$file" ]; then
        echo "Validating: $file"
        if ! python scripts/validate_submission.py "$file"; then
            echo "Validation failed for: $file"
            exit 1
        fi
    else
        echo "File not found: $file"
        exit 1
    fi
done

echo "All submission files validated successfully"
"#;

/// Write the gate script to `path`. On Unix the file is made executable.
pub fn write_workflow_script(path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, WORKFLOW_SCRIPT)
        .with_context(|| format!("failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to make {} executable", path.display()))?;
    }

    Ok(())
}
