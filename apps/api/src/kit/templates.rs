// Template text for the exported kit. Placeholders are `{name}` and are filled
// in a single pass by `kit::renderer::fill`, so substituted values are never
// re-scanned.

/// Full page. Expects: category, font, font_url, primary, secondary, tertiary, hero.
pub const HTML_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{category} AI Design</title>
    <link href="https://fonts.googleapis.com/css2?family={font_url}:wght@400;600;700&display=swap" rel="stylesheet">
    <link href="style.css" rel="stylesheet">
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {
            theme: {
                extend: {
                    colors: {
                        primary: '{primary}',
                        secondary: '{secondary}',
                        tertiary: '{tertiary}',
                    },
                    fontFamily: {
                        sans: ['"{font}"', 'sans-serif'],
                    }
                }
            }
        }
    </script>
</head>
<body class="bg-secondary text-primary font-sans antialiased">
    <nav class="bg-tertiary text-white shadow-md relative z-50">
        <div class="container mx-auto px-6 py-4 flex justify-between items-center">
            <h1 class="text-2xl font-bold tracking-tight">{category}<span class="opacity-70">.</span></h1>
            <button id="mobile-menu-btn" class="md:hidden" aria-label="Toggle menu">
                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path></svg>
            </button>
            <div class="hidden md:flex space-x-8 items-center">
                <a href="#" class="hover:opacity-80">Home</a>
                <a href="#" class="hover:opacity-80">About</a>
                <a href="#" class="bg-white text-tertiary px-5 py-2 rounded-full font-semibold">Contact Us</a>
            </div>
        </div>
        <div id="mobile-menu" class="hidden md:hidden px-6 pb-4 space-y-2">
            <a href="#" class="block">Home</a>
            <a href="#" class="block">About</a>
            <a href="#" class="block font-semibold">Contact Us</a>
        </div>
    </nav>
{hero}
    <script src="script.js"></script>
</body>
</html>"##;

/// Two columns: copy on the left, image on the right. Expects: category, headline, sub, img_url.
pub const SPLIT_SCREEN_HERO: &str = r#"    <header class="container mx-auto px-6 py-16 grid md:grid-cols-2 gap-12 items-center">
        <div>
            <h2 class="text-4xl md:text-6xl font-extrabold mb-6">{headline}</h2>
            <p class="text-lg opacity-80 max-w-xl mb-10">{sub}</p>
            <button id="cta-btn" class="bg-tertiary text-white px-8 py-3 rounded-full font-semibold">Get Started</button>
        </div>
        <img src="{img_url}" alt="{category}" class="rounded-2xl shadow-2xl w-full object-cover max-h-[500px]">
    </header>"#;

/// Card grid with the copy in the wide tile. Expects: category, headline, sub, img_url.
pub const BENTO_GRID_HERO: &str = r#"    <header class="container mx-auto px-6 py-16">
        <div class="grid md:grid-cols-3 gap-6">
            <div class="md:col-span-2 rounded-3xl bg-white/70 p-10 shadow-lg">
                <h2 class="text-4xl md:text-6xl font-extrabold mb-6">{headline}</h2>
                <p class="text-lg opacity-80 mb-10">{sub}</p>
                <button id="cta-btn" class="bg-tertiary text-white px-8 py-3 rounded-full font-semibold">Get Started</button>
            </div>
            <img src="{img_url}" alt="{category}" class="rounded-3xl shadow-2xl w-full h-full object-cover max-h-[500px]">
            <div class="rounded-3xl bg-primary text-secondary p-8">
                <h3 class="text-xl font-bold mb-2">Strategy</h3>
                <p class="opacity-80">Plans built around how {category} customers decide.</p>
            </div>
            <div class="rounded-3xl bg-tertiary text-white p-8">
                <h3 class="text-xl font-bold mb-2">Design</h3>
                <p class="opacity-80">A consistent system across every touchpoint.</p>
            </div>
            <div class="rounded-3xl bg-white/70 p-8 shadow">
                <h3 class="text-xl font-bold mb-2">Growth</h3>
                <p class="opacity-80">Measured results, reported clearly.</p>
            </div>
        </div>
    </header>"#;

/// Expects: secondary, tertiary.
pub const CSS_TEMPLATE: &str = "/* Custom CSS */
::-webkit-scrollbar { width: 10px; }
::-webkit-scrollbar-track { background: {secondary}; }
::-webkit-scrollbar-thumb { background: {tertiary}; border-radius: 5px; }
";

/// Expects: category (already escaped for a single-quoted JS string).
pub const JS_TEMPLATE: &str = "console.log('{category} design kit loaded.');

document.addEventListener('DOMContentLoaded', () => {
    const menuBtn = document.getElementById('mobile-menu-btn');
    const menu = document.getElementById('mobile-menu');
    if (menuBtn && menu) {
        menuBtn.addEventListener('click', () => menu.classList.toggle('hidden'));
    }

    const cta = document.getElementById('cta-btn');
    if (cta) {
        cta.addEventListener('click', () => alert('Thanks for your interest in {category}!'));
    }
});
";
