//! Explain command: usage summary for humans and AI assistants.

use anyhow::Result;

pub fn cmd_explain(brief: bool) -> Result<()> {
    println!("Manifold captures an HVAC consultancy project in one sitting:");
    println!("a project brief, a manually entered bill of quantities, and a");
    println!("statutory compliance checklist, with a derived engineering");
    println!("baseline and a cost/compliance findings report.");
    println!();
    println!("Commands:");
    println!("  manifold           Open the interactive studio");
    println!("  manifold demo      Render the report for a sample session");
    println!("  manifold explain   Show this summary");

    if brief {
        return Ok(());
    }

    println!();
    println!("Studio tabs:");
    println!("  Brief              Capture site, loads, budget, client");
    println!("  Bill of quantities Add/remove equipment lines, compliance");
    println!("  Analysis           Cash leaks and optimization suggestions");
    println!();
    println!("State lives only for the session; nothing is written to disk.");
    println!("Tune analyzer thresholds in manifold.toml ([analysis] section).");

    Ok(())
}
