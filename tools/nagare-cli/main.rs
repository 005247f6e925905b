use clap::Parser;
use nagare::prelude::*;

/// Parse a serialized flow definition and print the resulting node graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    flow_path: String,

    /// Print each node's notes as well
    #[arg(short, long)]
    notes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let flow = FlowConfig::from_file(&cli.flow_path)?;
    println!(
        "Flow: {} ({} operations)",
        flow.name.as_deref().unwrap_or("<unnamed>"),
        flow.operation_count()
    );

    let mut session = FlowSession::default();
    session.parse_flow(&flow);

    let Some(start) = session.start_node_id() else {
        println!("No start operation found; nothing to display.");
        return Ok(());
    };

    println!();
    print_node(&session, start, 0, cli.notes);
    println!(
        "\n{} nodes, {} link nodes",
        session.node_count(),
        session.link_node_ids().len()
    );

    Ok(())
}

/// Prints a node and its exit subtree, one indented line per node. Link
/// nodes terminate a branch and name the operation they point back to.
fn print_node(session: &FlowSession, id: NodeId, depth: usize, with_notes: bool) {
    let Some(node) = session.node(id) else {
        return;
    };
    let indent = "  ".repeat(depth);

    if let Some(link) = node.as_link() {
        let target = link
            .linked_operation()
            .map(|op| op.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!("{indent}[{id}] link -> operation {target}");
        return;
    }

    println!("{indent}[{id}] {} ({})", node.display_name(), node.type_name());
    if with_notes {
        for note in node.notes() {
            println!("{indent}    note: {note}");
        }
    }

    if let Some(exits) = node.exits() {
        for (idx, target) in exits.iter().enumerate() {
            match target {
                Some(target_id) => print_node(session, target_id, depth + 1, with_notes),
                None => println!("{indent}  (exit {idx}: no connection)"),
            }
        }
    }
}
