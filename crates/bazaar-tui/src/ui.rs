use crate::app::{App, InputMode, View};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

pub fn draw(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0]);

    match app.view {
        View::Log => draw_log(f, app, chunks[1]),
        View::Catalog => draw_catalog(f, app, chunks[1]),
        View::Cart => draw_cart(f, app, chunks[1]),
        View::Help => draw_help(f, chunks[1]),
    }

    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(format!(" Bazaar Storefront  v{}", env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, area);
}

fn draw_log(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Activity Log ({}) ", app.log.len()));

    if app.log.is_empty() {
        let msg = Paragraph::new("  No activity yet. Press 'a' to add a product, '?' for help.")
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Show the window of lines that fits, `log_offset` lines up from the
    // bottom.
    let height = area.height.saturating_sub(2) as usize;
    let end = app.log.len().saturating_sub(app.log_offset);
    let start = end.saturating_sub(height);
    let lines: Vec<Line<'_>> = app.log[start..end]
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();

    let log = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(log, area);
}

fn draw_catalog(f: &mut Frame<'_>, app: &App, area: Rect) {
    if app.manager.catalog_len() == 0 {
        let msg = Paragraph::new("  Catalog is empty. Press Esc to go back.")
            .block(Block::default().borders(Borders::ALL).title(" Catalog "));
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("NAME").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("PRICE").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("STOCK").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1);

    let rows: Vec<Row<'_>> = app
        .manager
        .products()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id().to_string()),
                Cell::from(p.name().to_owned()),
                Cell::from(format!("{:.2}", p.price())),
                Cell::from(p.quantity_available().to_string()).style(stock_color(
                    p.quantity_available(),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Catalog ({}) ", app.manager.catalog_len())),
    );

    f.render_widget(table, area);
}

fn draw_cart(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.manager.cart_view();
    if view.is_empty() {
        let msg = Paragraph::new("  Your cart is empty. Press Esc to go back.")
            .block(Block::default().borders(Borders::ALL).title(" Cart "));
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("NAME").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("QTY").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("SUBTOTAL").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1);

    let mut rows: Vec<Row<'_>> = view
        .lines
        .iter()
        .map(|l| {
            Row::new(vec![
                Cell::from(l.product_id.to_string()),
                Cell::from(l.name.clone()),
                Cell::from(l.quantity.to_string()),
                Cell::from(format!("{:.2}", l.subtotal)),
            ])
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from(""),
            Cell::from(""),
            Cell::from("Total").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(format!("{:.2}", view.total)).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .height(1),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Cart ({} line(s)) ", view.lines.len())),
    );

    f.render_widget(table, area);
}

fn draw_help(f: &mut Frame<'_>, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  a           Add product (name, price, quantity)"),
        Line::from("  c           Show catalog"),
        Line::from("  t           Add to cart (id, quantity)"),
        Line::from("  u           Update cart quantity (id, new quantity)"),
        Line::from("  v           View cart"),
        Line::from("  x           Remove item from cart"),
        Line::from("  o           Checkout"),
        Line::from("  j / ↓       Scroll log down"),
        Line::from("  k / ↑       Scroll log up"),
        Line::from("  g / Home    Oldest log line"),
        Line::from("  G / End     Newest log line"),
        Line::from("  ?           Show this help"),
        Line::from("  q / Esc     Quit / Back"),
        Line::from(""),
        Line::from("  Prompts: Enter confirms each field, Esc cancels the action."),
    ];

    let help = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(help, area);
}

fn draw_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let status = if app.pending_checkout.is_some() || app.input_mode != InputMode::Normal {
        Paragraph::new(format!(" {} ", app.status_message)).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Paragraph::new(format!(
            " {} │ [a] add  [c] catalog  [t] to cart  [u] update  [v] cart  [x] remove  [o] checkout  [?] help  [q] quit",
            app.status_message
        ))
        .style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(status, area);
}

fn stock_color(stock: u32) -> Style {
    match stock {
        0 => Style::default().fg(Color::Red),
        1..=3 => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Green),
    }
}
