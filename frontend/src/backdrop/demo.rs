use std::rc::Rc;

use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::gemini::GeminiClient;
use super::workflow::{self, BackdropError, BackdropIdea, BackdropImage, BackdropState};
use crate::content::Icon;
use crate::on_screen::AnimateOnVisible;

pub enum Msg {
    SetTheme(String),
    Generate,
    IdeaReady(BackdropIdea),
    ImageReady(BackdropImage),
    Failed(BackdropError),
}

pub struct BackdropDemo {
    state: BackdropState,
    client: Option<Rc<GeminiClient>>,
}

impl Component for BackdropDemo {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let client = match GeminiClient::from_config() {
            Ok(client) => Some(Rc::new(client)),
            Err(err) => {
                error!("AI backdrop demo disabled: {}", err);
                None
            }
        };

        Self {
            state: BackdropState::default(),
            client,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTheme(theme) => {
                self.state.set_theme(theme);
                true
            }
            Msg::Generate => {
                let Some(client) = self.client.clone() else {
                    return false;
                };

                let theme = match self.state.begin() {
                    Ok(theme) => theme,
                    Err(BackdropError::Busy) => return false,
                    Err(_) => return true,
                };

                let on_idea = ctx.link().callback(Msg::IdeaReady);
                ctx.link().send_future(async move {
                    match workflow::run(client.as_ref(), &theme, |idea| on_idea.emit(idea.clone())).await {
                        Ok(image) => Msg::ImageReady(image),
                        Err(err) => Msg::Failed(err),
                    }
                });
                true
            }
            Msg::IdeaReady(idea) => {
                self.state.idea_ready(&idea);
                true
            }
            Msg::ImageReady(image) => {
                info!("Backdrop generated");
                self.state.image_ready(&image);
                true
            }
            Msg::Failed(err) => {
                info!("Backdrop generation stopped during {:?}", self.state.phase());
                self.state.fail(&err);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.state.is_loading();
        let unavailable = self.client.is_none();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetTheme(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then(|| Msg::Generate));
        let onclick = ctx.link().callback(|_| Msg::Generate);

        html! {
            <div class="backdrop-demo">
                <AnimateOnVisible>
                    <div class="backdrop-demo-icon">{Icon::Sparkles.glyph()}</div>
                    <h2 class="section-title">{"Dream Up Your Perfect Backdrop"}</h2>
                    <p class="section-lead">
                        {"Describe your event theme and let our AI bring your vision to life. Try \"enchanted forest wedding\" or \"80s retro arcade party\"."}
                    </p>
                </AnimateOnVisible>

                <AnimateOnVisible class={classes!("backdrop-form-wrapper")} delay_ms={200}>
                    <div class="backdrop-form">
                        <input
                            type="text"
                            value={self.state.theme.clone()}
                            oninput={oninput}
                            onkeypress={onkeypress}
                            placeholder="Enter your event theme..."
                            disabled={loading || unavailable}
                        />
                        <button onclick={onclick} disabled={loading || unavailable}>
                            if loading {
                                <span class="spinner"></span>
                                {"Generating..."}
                            } else {
                                {"Generate with AI"}
                            }
                        </button>
                    </div>
                    if unavailable {
                        <p class="backdrop-message">{"The AI demo is currently unavailable."}</p>
                    }
                    if let Some(error) = self.state.error() {
                        <p class="backdrop-message">{error}</p>
                    }
                </AnimateOnVisible>

                { self.render_result() }
            </div>
        }
    }
}

impl BackdropDemo {
    fn render_result(&self) -> Html {
        let loading = self.state.is_loading();
        let idea = self.state.idea();
        let image = self.state.image_data_uri();

        if !loading && idea.is_none() && image.is_none() {
            return html! {};
        }

        html! {
            <div class="backdrop-result">
                <div class={classes!("backdrop-image", image.is_some().then(|| "shown"))}>
                    if let Some(src) = image {
                        <img src={src.to_string()} alt="AI generated backdrop" />
                    } else if loading {
                        <div class="backdrop-image-placeholder">
                            <p>{"Generating image..."}</p>
                        </div>
                    }
                </div>
                <div class={classes!("backdrop-idea", idea.is_some().then(|| "shown"))}>
                    if let Some(idea) = idea {
                        <h3>{"Your AI-Powered Backdrop"}</h3>
                        <p>{idea}</p>
                    } else if loading {
                        <p class="backdrop-pending">{"Generating idea..."}</p>
                    }
                </div>
            </div>
        }
    }
}
