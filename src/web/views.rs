use leptos::prelude::*;

use crate::board::{ActivityBoard, ActivityCard, BoardView, SelectOption};

const STYLE: &str = include_str!("../style.css");

pub(crate) fn render_page(board: &ActivityBoard) -> String {
    let message_html = render_message(board);
    let form_html = render_signup_form(&board.view().options);
    let cards_html = render_cards(board.view());
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Activity Sign-up Board"</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <h1>"Activity Sign-up Board"</h1>
                <p class="timestamp">"Updated: " {now}</p>
                <div inner_html=message_html />
                <section>
                    <h2>"Sign up"</h2>
                    <div inner_html=form_html />
                </section>
                <section>
                    <h2>"Activities"</h2>
                    <div id="activities-list" inner_html=cards_html />
                </section>
            </body>
        </html>
    }
    .to_html()
}

fn render_message(board: &ActivityBoard) -> String {
    match board.visible_message() {
        Some(msg) => {
            let class = format!("message {}", msg.kind.css_class());
            let text = msg.text.clone();
            view! { <p class=class>{text}</p> }.to_html()
        }
        None => view! { <p class="message hidden"></p> }.to_html(),
    }
}

fn render_signup_form(options: &[SelectOption]) -> String {
    let options_html: String = options
        .iter()
        .map(|o| {
            let value = o.value.clone();
            let label = o.label.clone();
            view! { <option value=value>{label}</option> }.to_html()
        })
        .collect();

    view! {
        <form class="signup-form" method="post" action="/signup">
            <label>
                "Activity "
                <select name="activity" inner_html=options_html />
            </label>
            <label>
                "Email "
                <input name="email" type="email" placeholder="you@example.com" />
            </label>
            <button type="submit">"Sign up"</button>
        </form>
    }
    .to_html()
}

fn render_cards(view: &BoardView) -> String {
    if view.load_failed {
        return view! { <p class="error">"Unable to load activities."</p> }.to_html();
    }
    if view.cards.is_empty() {
        return view! { <p class="empty">"No activities available."</p> }.to_html();
    }
    view.cards.iter().map(render_card).collect()
}

fn render_card(card: &ActivityCard) -> String {
    let participants_html = render_participants(card);
    let name = card.name.clone();
    let description = card.description.clone();
    let schedule = card.schedule.clone();
    let capacity = card.max_participants.to_string();
    let header = card.header.clone();

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p><strong>"Schedule: "</strong>{schedule}</p>
            <p><strong>"Max participants: "</strong>{capacity}</p>
            <div class="activity-participants">
                <h5>{header}</h5>
                <div inner_html=participants_html />
            </div>
        </div>
    }
    .to_html()
}

fn render_participants(card: &ActivityCard) -> String {
    if card.participants.is_empty() {
        return view! { <p class="participants-empty">"No participants yet"</p> }.to_html();
    }

    let rows_html: String = card
        .participants
        .iter()
        .map(|email| {
            let email_text = email.clone();
            let email_field = email.clone();
            let activity_field = card.name.clone();
            let label = format!("Remove {} from {}", email, card.name);

            view! {
                <li class="participant">
                    <span>{email_text}</span>
                    <form class="remove-form" method="post" action="/remove">
                        <input type="hidden" name="activity" value=activity_field />
                        <input type="hidden" name="email" value=email_field />
                        <button class="delete-btn" type="submit" title=label>"✖"</button>
                    </form>
                </li>
            }
            .to_html()
        })
        .collect();

    view! { <ul class="participants-list" inner_html=rows_html /> }.to_html()
}
