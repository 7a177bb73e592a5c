pub fn execute() -> String {
    [
        "📖 Fraud Dashboard Commands",
        "",
        "🧾 Form",
        "  set <field> <value>   Edit a field (transaction_id, user_id, amount, location, device)",
        "  submit                Analyze the current draft",
        "",
        "📊 Data",
        "  refresh               Reload the transaction list",
        "  stats                 Load aggregate statistics",
        "  show                  Render the whole dashboard",
        "",
        "🎯 General",
        "  ping                  Check that the backend is up",
        "  help                  Show this help message",
        "  quit                  Leave the console",
    ]
    .join("\n")
        + "\n"
}
