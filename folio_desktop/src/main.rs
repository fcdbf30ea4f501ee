//! Folio Desktop - Entry point for the Iced GUI application.

use folio_core::notification::{Notification, NotificationKind, Toast};
use folio_core::utils::error::ResultExt;
use folio_core::utils::logger;
use folio_core::Preferences;
use folio_desktop::canvas::{LoadingSpinner, MenuOverlay, ParticleLayer, TiltCard};
use folio_desktop::content::{self, Section, EDUCATION, PROJECTS};
use folio_desktop::styles::{
    hero_chip_style, icon_button_style, input_style, nav_link_style, primary_button_style,
    section_shell_style, toast_style, toolbar_style,
};
use folio_desktop::{
    app_theme_with_mode, palette_from_mode, ContactFormState, LoadingState, MenuState,
    PaletteColors, ParticleLayerState, ScrollTracker, SectionReveal, ThemeMode, TiltCardState,
    TypewriterState, CONTENT_MAX_WIDTH, EDUCATION_ITEM_BASE, EDUCATION_ITEM_SPACING,
    EDUCATION_REVEAL_MARGIN, HERO_HEIGHT, NAV_PANEL_WIDTH, PROJECT_CARD_HEIGHT,
    PROJECT_CARD_WIDTH, REVEAL_RISE_DISTANCE, SECTION_HEIGHT, SECTION_REVEAL_MARGIN,
    SECTION_STAGGER_MS, SUBMIT_DELAY_MS, TICK_INTERVAL_MS, TOAST_MAX_WIDTH, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use iced_fonts::bootstrap;

use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration};
use iced::widget::canvas::Canvas;
use iced::widget::{
    button, column, container, mouse_area, row, scrollable, stack, text, text_input, Space,
};
use iced::{Color, Element, Length, Padding, Point, Size, Subscription, Task};

/// Application state.
struct App {
    prefs: Preferences,
    theme_mode: ThemeMode,
    particles: ParticleLayerState,
    typewriter: TypewriterState,
    menu: MenuState,
    tilt_cards: Vec<TiltCardState>,
    loading: LoadingState,
    toast: Option<Toast>,
    section_reveals: Vec<SectionReveal>,
    education_reveals: Vec<SectionReveal>,
    scroll: ScrollTracker,
    window_size: Size,
    form: ContactFormState,
    music_playing: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    WindowResized(Size),
    MenuToggled,
    NavLinkClicked(Section),
    ThemeToggled,
    MusicToggled,
    CardHovered(usize, bool),
    CardMouseMoved(usize, Point),
    NameChanged(String),
    EmailChanged(String),
    MessageBodyChanged(String),
    SubmitForm,
    SubmitFinished,
    Scrolled(scrollable::Viewport),
}

/// Scrollable ID for smooth-scroll targeting
fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("page-scroll")
}

impl App {
    fn new() -> (Self, Task<Message>) {
        // Best-effort; the app runs fine without a log file.
        let _ = logger::init_global_logger();

        let prefs = Preferences::load_or_default();
        let theme_mode = if prefs.is_light() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        logger::info(&format!("starting with {} theme", theme_mode.name()));

        let section_reveals = Section::ALL
            .iter()
            .map(|s| SectionReveal::after(s.index() as f32 * SECTION_STAGGER_MS))
            .collect();
        let education_reveals = (0..EDUCATION.len()).map(|_| SectionReveal::manual()).collect();
        let tilt_cards = (0..PROJECTS.len()).map(|_| TiltCardState::default()).collect();

        (
            Self {
                prefs,
                theme_mode,
                particles: ParticleLayerState::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                typewriter: TypewriterState::new(content::GREETING_PREFIX, content::ANIMATED_NAME),
                menu: MenuState::default(),
                tilt_cards,
                loading: LoadingState::default(),
                toast: None,
                section_reveals,
                education_reveals,
                scroll: ScrollTracker::default(),
                window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                form: ContactFormState::default(),
                music_playing: false,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let dt = TICK_INTERVAL_MS as f32;

                self.particles.update();
                self.typewriter.update(dt);
                self.menu.update();
                self.scroll.update();
                self.loading.update(dt);

                for card in &mut self.tilt_cards {
                    card.update();
                }
                for reveal in &mut self.section_reveals {
                    reveal.update(dt);
                }
                for reveal in &mut self.education_reveals {
                    reveal.update(dt);
                }

                if let Some(toast) = &mut self.toast {
                    if !toast.advance(Duration::from_millis(TICK_INTERVAL_MS)) {
                        self.toast = None;
                    }
                }
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.particles.resize(size.width, size.height);
            }
            Message::MenuToggled => self.menu.toggle(),
            Message::NavLinkClicked(section) => {
                // Close the overlay, then smooth-scroll to the section.
                self.menu.close();
                return iced::widget::operation::scroll_to(
                    page_scroll_id(),
                    scrollable::AbsoluteOffset {
                        x: 0.0,
                        y: section.scroll_offset(),
                    },
                );
            }
            Message::ThemeToggled => {
                self.theme_mode = self.theme_mode.toggled();
                self.prefs.set_theme(self.theme_mode.is_light());
                if let Err(err) = self.prefs.save().with_config_context("theme") {
                    logger::warn(&format!("{err:#}"));
                }
            }
            Message::MusicToggled => self.music_playing = !self.music_playing,
            Message::CardHovered(idx, hovered) => {
                if let Some(card) = self.tilt_cards.get_mut(idx) {
                    card.set_hovered(hovered);
                }
            }
            Message::CardMouseMoved(idx, point) => {
                if let Some(card) = self.tilt_cards.get_mut(idx) {
                    card.set_mouse_position(point);
                }
            }
            Message::NameChanged(s) => self.form.name = s,
            Message::EmailChanged(s) => self.form.email = s,
            Message::MessageBodyChanged(s) => self.form.message = s,
            Message::SubmitForm => {
                if self.form.sending {
                    return Task::none();
                }
                match self.form.submission().validate() {
                    Err(err) => {
                        // The fields stay as entered.
                        self.toast = Some(Toast::new(Notification::error(err.to_string())));
                    }
                    Ok(()) => {
                        self.form.sending = true;
                        logger::debug("contact form accepted, simulating send");
                        return Task::perform(
                            tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS)),
                            |_| Message::SubmitFinished,
                        );
                    }
                }
            }
            Message::SubmitFinished => {
                self.form.reset();
                self.form.sending = false;
                self.toast = Some(Toast::new(Notification::success(
                    "Message sent successfully!",
                )));
            }
            Message::Scrolled(viewport) => {
                let offset = viewport.absolute_offset().y;
                self.scroll.record(offset);

                let visible_to = offset + self.window_size.height;
                for section in Section::ALL {
                    if visible_to - SECTION_REVEAL_MARGIN >= section.scroll_offset() {
                        self.section_reveals[section.index()].reveal();
                    }
                }
                let education_top = Section::Education.scroll_offset() + EDUCATION_ITEM_BASE;
                for (i, reveal) in self.education_reveals.iter_mut().enumerate() {
                    let item_offset = education_top + i as f32 * EDUCATION_ITEM_SPACING;
                    if visible_to - EDUCATION_REVEAL_MARGIN >= item_offset {
                        reveal.reveal();
                    }
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick);
        let resizes =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        Subscription::batch(vec![ticks, resizes])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette_from_mode(self.theme_mode);

        let background = Canvas::new(ParticleLayer::<Message>::new(&self.particles, pal))
            .width(Length::Fill)
            .height(Length::Fill);

        let page = scrollable(
            column![
                self.hero(pal),
                self.about_section(pal),
                self.projects_section(pal),
                self.education_section(pal),
                self.contact_section(pal),
            ]
            .width(Length::Fill),
        )
        .id(page_scroll_id())
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers: Vec<Element<'_, Message>> = vec![
            background.into(),
            page.into(),
            self.scroll_indicator(pal),
            self.toolbar(pal),
        ];

        if self.menu.progress() > 0.01 {
            layers.push(self.menu_overlay(pal));
        }
        if let Some(toast) = &self.toast {
            layers.push(self.toast_view(toast, pal));
        }
        if !self.loading.is_done() {
            layers.push(self.loading_view(pal));
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn toolbar(&self, pal: PaletteColors) -> Element<'_, Message> {
        // The toggle shows the mode a click switches to, like the
        // original's dark_mode/light_mode icon swap.
        let theme_icon = if self.theme_mode.is_light() {
            bootstrap::moon()
        } else {
            bootstrap::sun_fill()
        };
        let music_icon = if self.music_playing {
            bootstrap::volume_up()
        } else {
            bootstrap::volume_mute()
        };

        let bar = row![
            text("Folio")
                .size(18)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
            Space::new().width(Length::Fixed(16.0)),
            button(theme_icon.size(16))
                .padding(10)
                .style(icon_button_style(pal, self.theme_mode.is_light()))
                .on_press(Message::ThemeToggled),
            button(music_icon.size(16))
                .padding(10)
                .style(icon_button_style(pal, self.music_playing))
                .on_press(Message::MusicToggled),
            button(bootstrap::list().size(16))
                .padding(10)
                .style(icon_button_style(pal, self.menu.is_open()))
                .on_press(Message::MenuToggled),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center);

        container(container(bar).padding([8, 16]).style(toolbar_style(pal)))
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(16)
            .into()
    }

    fn hero(&self, pal: PaletteColors) -> Element<'_, Message> {
        let shift = self.scroll.parallax_shift().min(HERO_HEIGHT * 0.35);

        let chip = container(text("open to interesting problems").size(13))
            .padding([6, 14])
            .style(hero_chip_style(pal));

        let banner = row![
            text(self.typewriter.rendered())
                .size(44)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.text)
                }),
            text("|")
                .size(44)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
        ];

        let body = column![
            // Floating chip rides the parallax.
            container(chip).padding(Padding {
                top: shift,
                ..Padding::ZERO
            }),
            Space::new().height(Length::Fixed(24.0)),
            banner,
            Space::new().height(Length::Fixed(12.0)),
            text(content::TAGLINE)
                .size(18)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted)
                }),
        ]
        .align_x(iced::Alignment::Center);

        container(body)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    /// Shared frame for the four page sections: fixed height, centered
    /// shell, title and rise driven by the section's reveal progress.
    fn section_frame<'a>(
        &'a self,
        section: Section,
        pal: PaletteColors,
        body: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let progress = self.section_reveals[section.index()].progress();
        let rise = REVEAL_RISE_DISTANCE * (1.0 - progress);

        let title = text(section.title())
            .size(30)
            .style(move |_| iced::widget::text::Style {
                color: Some(Color {
                    a: progress,
                    ..pal.text
                }),
            });

        let shell = container(column![title, Space::new().height(Length::Fixed(18.0)), body])
            .padding(28)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill)
            .style(section_shell_style(pal));

        container(shell)
            .width(Length::Fill)
            .height(Length::Fixed(SECTION_HEIGHT))
            .align_x(Horizontal::Center)
            .padding(Padding {
                top: 40.0 + rise,
                left: 24.0,
                right: 24.0,
                ..Padding::ZERO
            })
            .into()
    }

    fn about_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let body = text(content::ABOUT_BODY)
            .size(16)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.text),
            });
        self.section_frame(Section::About, pal, body.into())
    }

    fn projects_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let mut cards = row![].spacing(20);
        for (i, project) in PROJECTS.iter().enumerate() {
            let face = Canvas::new(TiltCard::<Message>::new(
                &self.tilt_cards[i],
                Color {
                    a: 0.5,
                    ..pal.surface_raised
                },
                pal,
            ))
            .width(Length::Fixed(PROJECT_CARD_WIDTH))
            .height(Length::Fixed(PROJECT_CARD_HEIGHT));

            let copy = container(
                column![
                    text(project.title)
                        .size(20)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(pal.accent)
                        }),
                    Space::new().height(Length::Fixed(8.0)),
                    text(project.summary)
                        .size(14)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(pal.text)
                        }),
                    Space::new().height(Length::Fill),
                    text(project.stack)
                        .size(12)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(pal.muted)
                        }),
                ],
            )
            .padding(20)
            .width(Length::Fixed(PROJECT_CARD_WIDTH))
            .height(Length::Fixed(PROJECT_CARD_HEIGHT));

            let card = mouse_area(stack(vec![face.into(), copy.into()]))
                .on_enter(Message::CardHovered(i, true))
                .on_exit(Message::CardHovered(i, false))
                .on_move(move |point| Message::CardMouseMoved(i, point));

            cards = cards.push(card);
        }
        self.section_frame(Section::Projects, pal, cards.into())
    }

    fn education_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let mut items = column![].spacing(18);
        for (i, item) in EDUCATION.iter().enumerate() {
            let progress = self.education_reveals[i].progress();
            let indent = 24.0 * (1.0 - progress);

            let entry = row![
                text(item.years)
                    .size(14)
                    .width(Length::Fixed(110.0))
                    .style(move |_| iced::widget::text::Style {
                        color: Some(Color {
                            a: progress,
                            ..pal.muted
                        })
                    }),
                column![
                    text(item.school)
                        .size(17)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(Color {
                                a: progress,
                                ..pal.text
                            })
                        }),
                    text(item.degree)
                        .size(14)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(Color {
                                a: progress,
                                ..pal.muted
                            })
                        }),
                ]
                .spacing(4),
            ]
            .spacing(24);

            items = items.push(container(entry).padding(Padding {
                left: indent,
                ..Padding::ZERO
            }));
        }
        self.section_frame(Section::Education, pal, items.into())
    }

    fn contact_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let submit = button(
            text(if self.form.sending {
                "Sending..."
            } else {
                "Send Message"
            })
            .size(15),
        )
        .padding([10, 22])
        .style(primary_button_style(pal))
        .on_press_maybe((!self.form.sending).then_some(Message::SubmitForm));

        let fields = column![
            text_input("Your name", &self.form.name)
                .on_input(Message::NameChanged)
                .padding(12)
                .size(15)
                .style(input_style(pal)),
            text_input("Your email", &self.form.email)
                .on_input(Message::EmailChanged)
                .padding(12)
                .size(15)
                .style(input_style(pal)),
            text_input("Your message", &self.form.message)
                .on_input(Message::MessageBodyChanged)
                .padding(12)
                .size(15)
                .style(input_style(pal)),
            container(submit)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        ]
        .spacing(14);

        self.section_frame(Section::Contact, pal, fields.into())
    }

    fn menu_overlay(&self, pal: PaletteColors) -> Element<'_, Message> {
        let progress = self.menu.progress();
        let backdrop = Canvas::new(MenuOverlay::<Message>::new(&self.menu, pal))
            .width(Length::Fill)
            .height(Length::Fill);

        // Panel content waits for the slide to be mostly done so text
        // never floats over the page mid-animation.
        if progress <= 0.4 {
            return backdrop.into();
        }

        let mut links = column![].spacing(18).align_x(iced::Alignment::End);
        for section in Section::ALL {
            links = links.push(
                button(text(section.title()).size(22))
                    .style(nav_link_style(pal))
                    .on_press(Message::NavLinkClicked(section)),
            );
        }

        let close = button(bootstrap::x().size(18))
            .style(nav_link_style(pal))
            .on_press(Message::MenuToggled);

        let panel = container(
            column![
                container(close).width(Length::Fill).align_x(Horizontal::Right),
                Space::new().height(Length::Fixed(40.0)),
                links,
            ],
        )
        .width(Length::Fixed(NAV_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(28);

        let positioned = container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right);

        stack(vec![backdrop.into(), positioned.into()]).into()
    }

    fn toast_view<'a>(&'a self, toast: &'a Toast, pal: PaletteColors) -> Element<'a, Message> {
        let progress = toast.progress();
        let tint = match toast.notification.kind {
            NotificationKind::Success => pal.success,
            NotificationKind::Error => pal.danger,
        };
        let icon = match toast.notification.kind {
            NotificationKind::Success => bootstrap::check_circle(),
            NotificationKind::Error => bootstrap::exclamation_circle(),
        };

        let body = container(
            row![
                icon.size(16).style(move |_| iced::widget::text::Style {
                    color: Some(Color {
                        a: progress,
                        ..tint
                    })
                }),
                Space::new().width(Length::Fixed(10.0)),
                text(toast.notification.message.as_str()).size(14),
            ]
            .align_y(iced::Alignment::Center),
        )
        .padding([12, 18])
        .max_width(TOAST_MAX_WIDTH)
        .style(toast_style(pal, toast.notification.kind, progress));

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(24)
            .into()
    }

    fn scroll_indicator(&self, pal: PaletteColors) -> Element<'_, Message> {
        let opacity = self.scroll.indicator_opacity();
        container(
            bootstrap::chevron_down()
                .size(22)
                .style(move |_| iced::widget::text::Style {
                    color: Some(Color {
                        a: opacity,
                        ..pal.muted
                    }),
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(18)
        .into()
    }

    fn loading_view(&self, pal: PaletteColors) -> Element<'_, Message> {
        Canvas::new(LoadingSpinner::<Message>::new(&self.loading, pal))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn main() -> iced::Result {
    fn get_theme(app: &App) -> iced::Theme {
        app_theme_with_mode(app.theme_mode)
    }

    iced::application(App::new, App::update, App::view)
        .title("Folio")
        .subscription(App::subscription)
        .theme(get_theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run()
}
