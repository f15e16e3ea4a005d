//! Public landing page.

use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("500+", "Profissionais Ativos"),
    ("1,200+", "Eventos Realizados"),
    ("4.8\u{2605}", "Avaliação Média"),
    ("98%", "Satisfação"),
];

const FEATURES: [(&str, &str); 6] = [
    (
        "Profissionais Verificados",
        "Todos os nossos profissionais passam por rigoroso processo de verificação e validação.",
    ),
    (
        "Disponibilidade em Tempo Real",
        "Veja instantaneamente quais profissionais estão disponíveis para suas datas.",
    ),
    (
        "Pagamento Seguro",
        "Sistema de pagamento integrado com proteção para ambas as partes.",
    ),
    (
        "Sistema de Avaliações",
        "Avaliações transparentes que garantem qualidade em todos os serviços.",
    ),
    (
        "Crescimento Profissional",
        "Ferramentas para profissionais desenvolverem suas carreiras e aumentarem rendimentos.",
    ),
    (
        "Suporte 24/7",
        "Equipa de suporte dedicada disponível sempre que precisar.",
    ),
];

const SERVICE_CATEGORIES: [(&str, &str); 8] = [
    ("Garçons & Empregados", "120+"),
    ("Barmen & Bartenders", "85+"),
    ("Chefs & Cozinheiros", "65+"),
    ("Segurança", "45+"),
    ("Recepcionistas", "70+"),
    ("Técnicos Audio/Visual", "30+"),
    ("Serviços de Limpeza", "95+"),
    ("DJs & Animação", "40+"),
];

/// Marketing page shown to visitors. Every call to action funnels into the
/// sign-in page.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">"EventaJob"</span>
                <a class="btn btn--primary" href="/auth">
                    "Entrar"
                </a>
            </header>

            <section class="landing__hero">
                <h1>"Conecte-se com os Melhores Profissionais de Eventos"</h1>
                <p>
                    "A plataforma profissional que conecta empresas com talentos qualificados \
                     para eventos corporativos, sociais e gastronómicos."
                </p>
                <div class="landing__cta-row">
                    <a class="btn btn--primary" href="/auth">
                        "Contratar Profissionais"
                    </a>
                    <a class="btn" href="/auth">
                        "Trabalhar Conosco"
                    </a>
                </div>
            </section>

            <section class="landing__stats">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="landing__stat">
                                <span class="landing__stat-value">{value}</span>
                                <span class="landing__stat-label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="landing__features">
                <h2>"Porque Escolher o EventaJob?"</h2>
                <p>"Uma solução completa para suas necessidades de pessoal qualificado"</p>
                <div class="landing__feature-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing__services">
                <h2>"Profissionais Especializados"</h2>
                <p>"Encontre o profissional ideal para cada tipo de evento"</p>
                <div class="landing__service-grid">
                    {SERVICE_CATEGORIES
                        .into_iter()
                        .map(|(name, count)| {
                            view! {
                                <div class="card card--compact">
                                    <h3>{name}</h3>
                                    <span class="badge badge--success">{count} " Disponíveis"</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing__cta">
                <h2>"Pronto para Começar?"</h2>
                <p>"Junte-se a centenas de empresas que já confiam no EventaJob para seus eventos"</p>
                <a class="btn btn--primary" href="/auth">
                    "Criar Conta Gratuita"
                </a>
            </section>

            <footer class="landing__footer">
                <div class="landing__footer-grid">
                    <div>
                        <p class="landing__brand">"EventaJob"</p>
                        <p>
                            "A plataforma profissional para conectar talentos com oportunidades \
                             no setor de eventos."
                        </p>
                    </div>
                    <div>
                        <h4>"Para Empresas"</h4>
                        <ul>
                            <li>"Contratar Profissionais"</li>
                            <li>"Preços"</li>
                            <li>"Casos de Sucesso"</li>
                        </ul>
                    </div>
                    <div>
                        <h4>"Para Profissionais"</h4>
                        <ul>
                            <li>"Cadastre-se"</li>
                            <li>"Como Funciona"</li>
                            <li>"Central de Ajuda"</li>
                        </ul>
                    </div>
                    <div>
                        <h4>"Suporte"</h4>
                        <ul>
                            <li>"Contacto"</li>
                            <li>"FAQ"</li>
                            <li>"Termos de Uso"</li>
                        </ul>
                    </div>
                </div>
                <p class="landing__copyright">"\u{00a9} 2024 EventaJob. Todos os direitos reservados."</p>
            </footer>
        </div>
    }
}
