use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"movehere"}</h3>
                        <div class="social-links">
                            <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" class="social-link">
                                <i class="facebook-icon"></i>
                            </a>
                            <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" class="social-link">
                                <i class="instagram-icon"></i>
                            </a>
                            <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer" class="social-link">
                                <i class="linkedin-icon"></i>
                            </a>
                        </div>
                    </div>
                    <div class="footer-column">
                        <h3>{"Get in touch"}</h3>
                        <a href="mailto:movehereapp@email.com" class="footer-link">
                            {"movehereapp@email.com"}
                        </a>
                    </div>
                    <div class="footer-column">
                        <h3>{"Pages"}</h3>
                        <ul>
                            <li><a href="#" class="footer-link">{"HOME"}</a></li>
                            <li><a href="#about" class="footer-link">{"ABOUT"}</a></li>
                            <li><a href="#blog" class="footer-link">{"BLOG"}</a></li>
                            <li><a href="#faq" class="footer-link">{"FAQ"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h3>{"Utility pages"}</h3>
                        <ul>
                            <li><a href="#" class="footer-link">{"404 PAGE"}</a></li>
                            <li><a href="#contact" class="footer-link">{"CONTACT"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-copyright">
                    { format!("Proudly powered by MoveHere © {}", year) }
                </div>
            </div>
        </footer>
    }
}
