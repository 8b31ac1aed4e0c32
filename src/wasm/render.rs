//! Canvas animation driver: one requestAnimationFrame closure that clears
//! the surface, draws the particle field, then whichever hero scene the
//! wall clock selects.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::anim::helix::{DnaHelix, Strand};
use crate::anim::network::NeuronNetwork;
use crate::anim::particle::{Particle, PARTICLE_COUNT};
use crate::anim::projection::Camera;
use crate::anim::Scene;

use super::dom;

const CANVAS_ID: &str = "medical-canvas";

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn init() -> Result<(), JsValue> {
    let Some(element) = dom::document()?.get_element_by_id(CANVAS_ID) else {
        log::info!("no #{CANVAS_ID} on page; decorative animation disabled");
        return Ok(());
    };
    start(element.dyn_into()?)
}

/// Size the surface to the window and begin the frame loop. Never returns
/// control of the loop; it reschedules itself for the life of the page.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    fit_to_window(&canvas)?;

    // Track the window size. Only the surface dimensions change on resize;
    // animation state is in world units and survives untouched.
    let resize_target = canvas.clone();
    let resize = Closure::wrap(Box::new(move || {
        if let Err(e) = fit_to_window(&resize_target) {
            log::error!("canvas resize failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    dom::window()?.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let mut helix = DnaHelix::new(0.0, 0.0, 0.0);
    let mut network = NeuronNetwork::generate();
    let mut particles: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| Particle::spawn(width, height))
        .collect();

    // `frame` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference
    // to it from within itself.
    let frame: FrameClosure = Rc::new(RefCell::new(None));
    let first = frame.clone();
    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let camera = Camera::centered(width, height);

        ctx.clear_rect(0.0, 0.0, width, height);

        // Particles stay in the background of both scenes.
        for particle in &mut particles {
            particle.update(width, height);
            draw_particle(&ctx, particle, &camera);
        }

        match Scene::at(js_sys::Date::now()) {
            Scene::Helix => {
                helix.update();
                draw_helix(&ctx, &helix, &camera);
            }
            Scene::Network => {
                network.update();
                draw_network(&ctx, &network, &camera);
            }
        }

        if let Err(e) = schedule(&frame) {
            log::error!("animation frame request failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>));

    schedule(&first)
}

fn schedule(frame: &FrameClosure) -> Result<(), JsValue> {
    dom::window()?
        .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let window = dom::window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok(())
}

fn strand_color(strand: Strand, alpha: f64) -> String {
    match strand {
        Strand::First => format!("rgba(0, 168, 255, {alpha})"),
        Strand::Second => format!("rgba(94, 96, 206, {alpha})"),
    }
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle, camera: &Camera) {
    let p = particle.project(camera);
    ctx.set_fill_style_str(&format!("rgba(0, 168, 255, {})", particle.opacity * p.scale));
    ctx.begin_path();
    ctx.arc(p.x, p.y, particle.size * p.scale, 0.0, TAU).ok();
    ctx.fill();
}

/// Rungs, then strands, then glow nodes: later passes occlude earlier ones
/// regardless of true depth, which is the intended layering for this
/// decoration. No z-sorting.
fn draw_helix(ctx: &CanvasRenderingContext2d, helix: &DnaHelix, camera: &Camera) {
    let points = helix.points();

    // Base-pair rungs between the two strands of each segment.
    for pair in points.chunks_exact(2) {
        let p1 = helix.project(&pair[0], camera);
        let p2 = helix.project(&pair[1], camera);
        ctx.set_stroke_style_str(&format!("rgba(0, 168, 255, {})", 0.2 * p1.scale));
        ctx.set_line_width(2.0 * p1.scale);
        ctx.begin_path();
        ctx.move_to(p1.x, p1.y);
        ctx.line_to(p2.x, p2.y);
        ctx.stroke();
    }

    for strand in [Strand::First, Strand::Second] {
        let strand_points: Vec<_> = points.iter().filter(|p| p.strand == strand).collect();
        ctx.set_stroke_style_str(&strand_color(strand, 0.6));
        for w in strand_points.windows(2) {
            let p1 = helix.project(w[0], camera);
            let p2 = helix.project(w[1], camera);
            ctx.set_line_width(3.0 * p1.scale);
            ctx.begin_path();
            ctx.move_to(p1.x, p1.y);
            ctx.line_to(p2.x, p2.y);
            ctx.stroke();
        }
    }

    for point in points {
        let p = helix.project(point, camera);
        let radius = 8.0 * p.scale;
        let Ok(glow) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, radius) else {
            continue;
        };
        glow.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.8 * p.scale))
            .ok();
        glow.add_color_stop(0.5, &strand_color(point.strand, 0.4 * p.scale))
            .ok();
        glow.add_color_stop(1.0, "transparent").ok();
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        ctx.arc(p.x, p.y, radius, 0.0, TAU).ok();
        ctx.fill();
    }
}

fn draw_network(ctx: &CanvasRenderingContext2d, network: &NeuronNetwork, camera: &Camera) {
    // Connections pulse with their source neuron's phase.
    for conn in &network.connections {
        let source = &network.neurons[conn.from];
        let p1 = source.project(camera);
        let p2 = network.neurons[conn.to].project(camera);
        let signal = source.signal();

        ctx.set_stroke_style_str(&format!("rgba(0, 168, 255, {})", 0.1 + signal * 0.2));
        ctx.set_line_width((1.0 + signal) * ((p1.scale + p2.scale) / 2.0));
        ctx.begin_path();
        ctx.move_to(p1.x, p1.y);
        ctx.line_to(p2.x, p2.y);
        ctx.stroke();
    }

    // Painter's order: farthest neurons first so near ones occlude them.
    let mut ordered: Vec<_> = network.neurons.iter().collect();
    ordered.sort_by(|a, b| b.z.total_cmp(&a.z));

    for neuron in ordered {
        let p = neuron.project(camera);
        let pulse = neuron.signal();
        let radius = (15.0 + pulse * 8.0) * p.scale;

        if let Ok(glow) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, radius) {
            glow.add_color_stop(0.0, "rgba(255, 255, 255, 0.9)").ok();
            glow.add_color_stop(0.3, "rgba(0, 168, 255, 0.6)").ok();
            glow.add_color_stop(1.0, "rgba(0, 168, 255, 0.1)").ok();
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.begin_path();
            ctx.arc(p.x, p.y, radius, 0.0, TAU).ok();
            ctx.fill();
        }

        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", 0.8 + pulse * 0.2));
        ctx.begin_path();
        ctx.arc(p.x, p.y, 5.0 * p.scale, 0.0, TAU).ok();
        ctx.fill();
    }
}
