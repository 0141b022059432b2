use std::process::Command;

fn main() {
    // Only rebuild CSS when template or CSS files change
    println!("cargo:rerun-if-changed=assets/css/input.css");
    println!("cargo:rerun-if-changed=templates/");

    // Try to run Tailwind CSS standalone CLI
    let status = Command::new("tailwindcss")
        .args([
            "-i",
            "assets/css/input.css",
            "-o",
            "assets/css/output.css",
            "--minify",
        ])
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("cargo:warning=Tailwind CSS compiled successfully");
        }
        _ => {
            // Tailwind CLI not available — create a minimal fallback CSS
            println!("cargo:warning=Tailwind CLI not found, using fallback CSS");
            let fallback = r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, sans-serif; line-height: 1.6; color: #1c1917; background: #fafaf9; -webkit-font-smoothing: antialiased; }
.min-h-screen { min-height: 100vh; }
.mx-auto { margin-left: auto; margin-right: auto; }
.max-w-4xl { max-width: 56rem; }
.max-w-7xl { max-width: 80rem; }
.max-w-3xl { max-width: 48rem; }
.max-w-md { max-width: 28rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-8 { padding-top: 2rem; padding-bottom: 2rem; }
.py-16 { padding-top: 4rem; padding-bottom: 4rem; }
.p-4 { padding: 1rem; }
.p-6 { padding: 1.5rem; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-4 { margin-bottom: 1rem; }
.mb-8 { margin-bottom: 2rem; }
.mb-12 { margin-bottom: 3rem; }
.mt-4 { margin-top: 1rem; }
.mt-12 { margin-top: 3rem; }
.flex { display: flex; }
.inline-flex { display: inline-flex; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.flex-col { flex-direction: column; }
.gap-2 { gap: 0.5rem; }
.gap-4 { gap: 1rem; }
.gap-6 { gap: 1.5rem; }
.grid { display: grid; }
.grid-cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
@media (min-width: 768px) { .md\:grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); } .md\:grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); } }
@media (min-width: 1024px) { .lg\:grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); } .lg\:grid-cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); } }
@media (max-width: 900px) { .grid-cols-4, .grid-cols-3 { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
@media (max-width: 600px) { .grid-cols-4, .grid-cols-3, .grid-cols-2 { grid-template-columns: 1fr; } }
.text-center { text-align: center; }
.text-xs { font-size: 0.75rem; }
.text-sm { font-size: 0.875rem; }
.text-lg { font-size: 1.125rem; }
.text-2xl { font-size: 1.5rem; }
.text-4xl { font-size: 2.25rem; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.text-white { color: #fff; }
.text-stone-400 { color: #a8a29e; }
.text-stone-500 { color: #78716c; }
.text-stone-600 { color: #57534e; }
.text-stone-700 { color: #44403c; }
.text-stone-900 { color: #1c1917; }
.bg-white { background-color: #fff; }
.bg-stone-50 { background-color: #fafaf9; }
.bg-amber-50 { background-color: #fffbeb; }
.bg-stone-900 { background-color: #1c1917; }
.border { border: 1px solid #e7e5e4; }
.border-b { border-bottom: 1px solid #e7e5e4; }
.border-t { border-top: 1px solid #e7e5e4; }
.rounded-lg { border-radius: 0.5rem; }
.rounded-xl { border-radius: 0.75rem; }
.rounded-full { border-radius: 9999px; }
.shadow-sm { box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.whitespace-pre-wrap { white-space: pre-wrap; }
.w-full { width: 100%; }
.h-40 { height: 10rem; }
.h-96 { height: 24rem; }
.object-cover { object-fit: cover; width: 100%; height: 100%; }
.overflow-hidden { overflow: hidden; }
a { color: inherit; text-decoration: none; }
a:hover { opacity: 0.8; }
.btn { display: inline-flex; align-items: center; justify-content: center; padding: 0.5rem 1rem; border-radius: 0.5rem; font-size: 0.875rem; font-weight: 500; transition: all 0.15s; cursor: pointer; text-decoration: none; border: none; }
.btn-primary { background: #1c1917; color: #fff; }
.btn-primary:hover { background: #44403c; }
.btn-secondary { background: #fff; color: #1c1917; border: 1px solid #d6d3d1; }
.btn-secondary:hover { background: #f5f5f4; }
.card { background: #fff; border-radius: 0.75rem; border: 1px solid #e7e5e4; box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); overflow: hidden; display: flex; flex-direction: column; }
.badge { display: inline-flex; padding: 0.25rem 0.75rem; border-radius: 9999px; background: #fef3c7; color: #92400e; font-size: 0.75rem; font-weight: 500; }
.flex-1 { flex: 1 1 0%; }
.flex-wrap { flex-wrap: wrap; }
.list-disc { list-style-type: disc; }
.pl-5 { padding-left: 1.25rem; }
.py-12 { padding-top: 3rem; padding-bottom: 3rem; }
.py-24 { padding-top: 6rem; padding-bottom: 6rem; }
.p-8 { padding: 2rem; }
.gap-1 { gap: 0.25rem; }
.gap-3 { gap: 0.75rem; }
.gap-8 { gap: 2rem; }
.gap-10 { gap: 2.5rem; }
.mt-2 { margin-top: 0.5rem; }
.mt-6 { margin-top: 1.5rem; }
.mt-8 { margin-top: 2rem; }
.mt-10 { margin-top: 2.5rem; }
.mb-1 { margin-bottom: 0.25rem; }
.mb-6 { margin-bottom: 1.5rem; }
.pt-8 { padding-top: 2rem; }
.text-xl { font-size: 1.25rem; }
.text-3xl { font-size: 1.875rem; }
.text-right { text-align: right; }
.text-amber-600 { color: #d97706; }
.text-amber-700 { color: #b45309; }
.h-20 { height: 5rem; }
.h-48 { height: 12rem; }
.w-20 { width: 5rem; }
.max-w-2xl { max-width: 42rem; }
.max-w-none { max-width: none; }
.rounded { border-radius: 0.25rem; }
.rounded-t { border-top-left-radius: 0.5rem; border-top-right-radius: 0.5rem; }
.leading-relaxed { line-height: 1.75; }
.break-all { word-break: break-all; }
.font-mono { font-family: ui-monospace, monospace; }
.whitespace-pre-line { white-space: pre-line; }
.prose p { margin-bottom: 1rem; }
.prose a { color: #b45309; text-decoration: underline; }
.items-start { align-items: flex-start; }
.page-link { display: inline-flex; min-width: 2.5rem; justify-content: center; padding: 0.5rem 0.75rem; border-radius: 0.5rem; border: 1px solid #e7e5e4; background: #fff; }
.page-link.current { background: #1c1917; color: #fff; border-color: #1c1917; }
.page-link.disabled { color: #d6d3d1; pointer-events: none; }
.lang-switch a { padding: 0.25rem 0.5rem; text-transform: uppercase; font-size: 0.75rem; }
.lang-switch a.active { font-weight: 700; text-decoration: underline; }
#assistant-toggle { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 40; background: #1c1917; color: #fff; padding: 0.75rem 1.25rem; border-radius: 9999px; border: none; cursor: pointer; box-shadow: 0 4px 12px rgb(0 0 0 / 0.2); }
#assistant-panel { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 50; width: 100%; max-width: 24rem; height: 500px; background: #fffbeb; border-radius: 1rem; border: 1px solid #e7e5e4; box-shadow: 0 8px 24px rgb(0 0 0 / 0.25); display: flex; flex-direction: column; overflow: hidden; }
#assistant-panel.hidden, #assistant-toggle.hidden { display: none; }
#assistant-header { background: #1c1917; color: #fff; padding: 1rem; display: flex; justify-content: space-between; align-items: center; }
#assistant-messages { flex-grow: 1; padding: 1rem; overflow-y: auto; }
#assistant-messages .msg { max-width: 80%; padding: 0.75rem; border-radius: 0.5rem; margin-bottom: 0.75rem; font-size: 0.875rem; }
#assistant-messages .msg.user { background: #1c1917; color: #fff; margin-left: auto; }
#assistant-messages .msg.bot { background: #fff; border: 1px solid #e7e5e4; }
#assistant-form { display: flex; gap: 0.5rem; padding: 0.75rem; border-top: 1px solid #e7e5e4; background: #fff; }
#assistant-form input { flex-grow: 1; padding: 0.5rem 0.75rem; border: 1px solid #d6d3d1; border-radius: 0.5rem; }
"#;
            std::fs::create_dir_all("assets/css").ok();
            std::fs::write("assets/css/output.css", fallback).ok();
        }
    }
}
