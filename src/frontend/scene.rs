use super::hooks::FrameLoop;
use crate::content::{HEAD_MODEL_PATH, SCENE_PHRASES};
use crate::geometry::{palette, CssColors, OrbitCamera, Projected, Rgb};
use crate::model::{HeadModel, HeadShape, ModelError};
use crate::quality::RenderSettings;
use crate::scene::{Primitive, SceneComposer};
use gloo_events::EventListener;
use gloo_net::http::Request;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

/// Camera polar swing, in radians, across the full viewport height.
const POINTER_PARALLAX: f32 = 0.4;

async fn fetch_head_model() -> Result<HeadModel, ModelError> {
    let response = Request::get(HEAD_MODEL_PATH)
        .send()
        .await
        .map_err(|error| ModelError::Fetch(error.to_string()))?;
    if !response.ok() {
        return Err(ModelError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|error| ModelError::Fetch(error.to_string()))?;
    HeadModel::parse(&body)
}

struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    settings: RenderSettings,
    width: f64,
    height: f64,
    dpr: f64,
    colors: RefCell<CssColors>,
}

impl CanvasRenderer {
    fn new(canvas: HtmlCanvasElement, settings: RenderSettings) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|error| format!("{error:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        let mut renderer = Self {
            canvas,
            ctx,
            settings,
            width: 0.0,
            height: 0.0,
            dpr: 0.0,
            colors: RefCell::new(CssColors::default()),
        };
        renderer.fit();
        log::info!(
            "scene canvas {}x{} @{}x, quality {}",
            renderer.width,
            renderer.height,
            renderer.dpr,
            settings.tier.as_str()
        );
        Ok(renderer)
    }

    /// Keeps the backing store in physical pixels, capped per tier.
    fn fit(&mut self) {
        let device_ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let dpr = self.settings.pixel_ratio(device_ratio);
        let width = f64::from(self.canvas.client_width());
        let height = f64::from(self.canvas.client_height());
        if width == self.width && height == self.height && dpr == self.dpr {
            return;
        }
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.canvas.set_width((width * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
        self.ctx.set_image_smoothing_enabled(self.settings.antialias);
    }

    fn set_fill(&self, rgb: Rgb) {
        self.ctx.set_fill_style_str(self.colors.borrow_mut().get(rgb));
    }

    fn set_stroke(&self, rgb: Rgb) {
        self.ctx.set_stroke_style_str(self.colors.borrow_mut().get(rgb));
    }

    fn project(&self, camera: &OrbitCamera, point: glam::Vec3) -> Option<Projected> {
        camera.project(point, self.width as f32, self.height as f32)
    }

    fn render(&mut self, items: &[Primitive], camera: &OrbitCamera, t: f32, phrase: usize) {
        self.fit();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        let background = ctx.create_linear_gradient(0.0, 0.0, self.width, self.height);
        background.add_color_stop(0.0, &palette::DARK_PRIMARY.css(1.0)).ok();
        background.add_color_stop(1.0, &palette::PRIMARY.css(1.0)).ok();
        ctx.set_fill_style_canvas_gradient(&background);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for item in items {
            self.draw(item, camera, false);
        }
        if self.settings.post_processing {
            self.bloom(items, camera);
        }
        self.draw_phrase(camera, t, phrase);
        if self.settings.post_processing {
            self.vignette();
        }
    }

    fn draw(&self, item: &Primitive, camera: &OrbitCamera, bloom: bool) {
        let ctx = &self.ctx;
        match item {
            Primitive::Polygon {
                points,
                fill,
                alpha,
                glow,
            } => {
                let Some(projected) = self.project_all(camera, points) else {
                    return;
                };
                self.trace(&projected, true);
                ctx.set_global_alpha(f64::from(*alpha));
                self.set_fill(*fill);
                if bloom {
                    ctx.set_shadow_color(&palette::GOLD.css(0.8));
                    ctx.set_shadow_blur(30.0);
                } else if self.settings.shadows && !glow {
                    ctx.set_shadow_color("rgba(0, 0, 0, 0.35)");
                    ctx.set_shadow_blur(6.0);
                    ctx.set_shadow_offset_y(3.0);
                }
                ctx.fill();
                ctx.set_shadow_blur(0.0);
                ctx.set_shadow_offset_y(0.0);
            }
            Primitive::Polyline {
                points,
                color,
                alpha,
                width,
                closed,
            } => {
                let Some(projected) = self.project_all(camera, points) else {
                    return;
                };
                let scale = projected.iter().map(|p| p.scale).sum::<f32>() / projected.len() as f32;
                self.trace(&projected, *closed);
                ctx.set_global_alpha(f64::from(*alpha));
                self.set_stroke(*color);
                ctx.set_line_width(f64::from((width * scale).max(0.5)));
                ctx.stroke();
            }
            Primitive::Point {
                position,
                color,
                size,
                alpha,
            } => {
                let Some(p) = self.project(camera, *position) else {
                    return;
                };
                let side = f64::from((size * p.scale).max(1.0));
                ctx.set_global_alpha(f64::from(*alpha));
                self.set_fill(*color);
                ctx.fill_rect(f64::from(p.x) - side / 2.0, f64::from(p.y) - side / 2.0, side, side);
            }
            Primitive::Label {
                position,
                text,
                color,
                size_px,
            } => {
                let Some(p) = self.project(camera, *position) else {
                    return;
                };
                // Sized relative to the scene origin's depth.
                let relative = self
                    .project(camera, glam::Vec3::ZERO)
                    .map(|origin| p.scale / origin.scale)
                    .unwrap_or(1.0);
                ctx.set_global_alpha(0.7);
                self.set_fill(*color);
                ctx.set_font(&format!(
                    "{:.0}px 'Amiri', serif",
                    (size_px * relative).clamp(10.0, 48.0)
                ));
                ctx.set_text_align("center");
                ctx.fill_text(text, f64::from(p.x), f64::from(p.y)).ok();
            }
        }
        ctx.set_global_alpha(1.0);
    }

    fn project_all(&self, camera: &OrbitCamera, points: &[glam::Vec3]) -> Option<Vec<Projected>> {
        if points.is_empty() {
            return None;
        }
        points.iter().map(|point| self.project(camera, *point)).collect()
    }

    fn trace(&self, projected: &[Projected], closed: bool) {
        let ctx = &self.ctx;
        ctx.begin_path();
        for (index, p) in projected.iter().enumerate() {
            if index == 0 {
                ctx.move_to(f64::from(p.x), f64::from(p.y));
            } else {
                ctx.line_to(f64::from(p.x), f64::from(p.y));
            }
        }
        if closed {
            ctx.close_path();
        }
    }

    /// Additive redraw of emissive surfaces.
    fn bloom(&self, items: &[Primitive], camera: &OrbitCamera) {
        self.ctx.set_global_composite_operation("lighter").ok();
        for item in items {
            if matches!(item, Primitive::Polygon { glow: true, .. }) {
                self.draw(item, camera, true);
            }
        }
        self.ctx.set_global_composite_operation("source-over").ok();
    }

    fn vignette(&self) {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let outer = cx.hypot(cy);
        let Ok(gradient) = self.ctx.create_radial_gradient(cx, cy, outer * 0.45, cx, cy, outer) else {
            return;
        };
        gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)").ok();
        gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0.55)").ok();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_phrase(&self, camera: &OrbitCamera, t: f32, phrase: usize) {
        let Some((arabic, translation)) = SCENE_PHRASES.get(phrase) else {
            return;
        };
        let Some(p) = self.project(camera, SceneComposer::phrase_anchor(t)) else {
            return;
        };
        let ctx = &self.ctx;
        ctx.set_text_align("center");
        ctx.set_fill_style_str(&palette::GOLD.css(0.9));
        ctx.set_font("28px 'Amiri', serif");
        ctx.fill_text(arabic, f64::from(p.x), f64::from(p.y)).ok();
        ctx.set_fill_style_str(&palette::LIGHT.css(0.7));
        ctx.set_font("14px 'Inter', sans-serif");
        ctx.fill_text(translation, f64::from(p.x), f64::from(p.y) + 24.0).ok();
    }
}

#[derive(Properties, PartialEq)]
pub struct SceneCanvasProps {
    pub settings: RenderSettings,
}

/// Full-viewport canvas behind the page, animated every frame.
#[function_component(SceneCanvas)]
pub fn scene_canvas(props: &SceneCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let settings = props.settings;
        use_effect_with(settings, move |settings| {
            let settings = *settings;
            let setup = canvas_ref
                .cast::<HtmlCanvasElement>()
                .ok_or_else(|| "scene canvas not mounted".to_string())
                .and_then(|canvas| CanvasRenderer::new(canvas, settings));

            let running = match setup {
                Ok(mut renderer) => {
                    let mut rng = fastrand::Rng::new();
                    let composer = Rc::new(RefCell::new(SceneComposer::new(settings, &mut rng)));

                    {
                        let composer = Rc::downgrade(&composer);
                        spawn_local(async move {
                            let head = HeadShape::from_result(fetch_head_model().await);
                            if let Some(composer) = composer.upgrade() {
                                composer.borrow_mut().set_head(head);
                            }
                        });
                    }

                    let pointer: Rc<Cell<Option<(f32, f32)>>> = Rc::new(Cell::new(None));
                    let listener = window().map(|win| {
                        let pointer = pointer.clone();
                        EventListener::new(&win, "mousemove", move |event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                pointer.set(Some((event.client_x() as f32, event.client_y() as f32)));
                            }
                        })
                    });

                    let mut started_at: Option<f64> = None;
                    let frames = FrameLoop::start(move |timestamp| {
                        let start = *started_at.get_or_insert(timestamp);
                        let elapsed_ms = timestamp - start;
                        let t = (elapsed_ms / 1000.0) as f32;
                        let mut camera = OrbitCamera::at_time(t);
                        if let Some((_, y)) = pointer.get() {
                            let offset = y / (renderer.height as f32).max(1.0) - 0.5;
                            camera = camera.with_polar(std::f32::consts::FRAC_PI_2 + offset * POINTER_PARALLAX);
                        }

                        let mut composer = composer.borrow_mut();
                        let hovered = pointer.get().is_some_and(|(x, y)| {
                            composer.is_over_centrepiece(
                                &camera,
                                x,
                                y,
                                renderer.width as f32,
                                renderer.height as f32,
                            )
                        });
                        composer.update_hover(hovered);
                        let items = composer.compose(t, &camera);
                        renderer.render(&items, &camera, t, SceneComposer::phrase_index(elapsed_ms));
                        true
                    });
                    Some((frames, listener))
                }
                Err(error) => {
                    log::warn!("decorative scene disabled: {error}");
                    None
                }
            };

            move || drop(running)
        });
    }

    html! {
        <canvas ref={canvas_ref} class="scene-canvas" aria-hidden="true" />
    }
}
